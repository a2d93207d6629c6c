//! Payload classification tests.
//!
//! Tests for recognizer ordering, fallback, and failure handling.

use squawk_foundation::{Error, Result};
use squawk_parser::{
    FnRecognizer, Payload, PayloadClassifier, PayloadKind, Recognizer, RecognizerRegistry, Token,
    find_phrase,
};

fn words(text: &str) -> Vec<Token> {
    text.split(' ').map(Token::word).collect()
}

fn classify(content: &str) -> Payload {
    PayloadClassifier::classify(content, &words(content), &RecognizerRegistry::standard())
}

struct Failing;

impl Recognizer for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn attempt(&self, _content: &str, _tokens: &[Token]) -> Result<Option<Payload>> {
        Err(Error::recognizer("failing", "lookup table missing"))
    }
}

#[test]
fn standard_registry_order() {
    assert_eq!(
        RecognizerRegistry::standard().names(),
        vec!["radio_check", "request_startup", "say_again", "acknowledgment"]
    );
}

#[test]
fn standard_phraseology() {
    assert_eq!(classify("roger").kind(), PayloadKind::Acknowledgment);
    assert_eq!(classify("affirmative").kind(), PayloadKind::Acknowledgment);
    assert_eq!(classify("say again all after level").kind(), PayloadKind::SayAgain);
    assert_eq!(classify("radio check").kind(), PayloadKind::RadioCheck);
    assert_eq!(classify("requesting startup").kind(), PayloadKind::RequestStartup);
    assert_eq!(classify("request flight level 350").kind(), PayloadKind::Uninterpreted);
}

#[test]
fn do_you_copy_is_a_radio_check() {
    assert_eq!(classify("do you copy").kind(), PayloadKind::RadioCheck);
}

#[test]
fn first_match_wins() {
    let registry = RecognizerRegistry::new()
        .with(FnRecognizer::new("first", |content: &str, _: &[Token]| {
            Some(Payload::SayAgain { raw: content.into() })
        }))
        .with(FnRecognizer::new("second", |content: &str, _: &[Token]| {
            Some(Payload::Acknowledgment { raw: content.into() })
        }));

    let payload = PayloadClassifier::classify("roger", &words("roger"), &registry);
    assert_eq!(payload.kind(), PayloadKind::SayAgain);
}

#[test]
fn fallback_keeps_content_verbatim() {
    let payload = PayloadClassifier::classify(
        "request flight level 350",
        &words("request flight level 350"),
        &RecognizerRegistry::new(),
    );
    assert_eq!(payload, Payload::uninterpreted("request flight level 350"));
    assert!(payload.is_uninterpreted());
}

#[test]
fn failing_recognizer_is_skipped() {
    let registry = RecognizerRegistry::new()
        .with(Failing)
        .with(FnRecognizer::new("ack", |content: &str, tokens: &[Token]| {
            find_phrase(tokens, &[&["roger"]]).map(|_| Payload::Acknowledgment {
                raw: content.into(),
            })
        }));

    let payload = PayloadClassifier::classify("roger", &words("roger"), &registry);
    assert_eq!(payload.kind(), PayloadKind::Acknowledgment);

    let payload = PayloadClassifier::classify("negative", &words("negative"), &registry);
    assert!(payload.is_uninterpreted());
}

#[test]
fn phrases_must_be_contiguous() {
    let tokens = words("say it again");
    assert_eq!(find_phrase(&tokens, &[&["say", "again"]]), None);
    assert_eq!(find_phrase(&tokens, &[&["say", "it", "again"]]), Some(0));
}

#[test]
fn phrases_match_whole_words_only() {
    assert_eq!(find_phrase(&words("rogering"), &[&["roger"]]), None);
    assert_eq!(find_phrase(&words("ROGER"), &[&["roger"]]), Some(0));
}
