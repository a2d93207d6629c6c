//! Full parser pipeline tests.
//!
//! Tests for end-to-end transmission understanding.

use std::sync::Arc;

use squawk_foundation::{Directory, Identity, Roster};
use squawk_parser::{
    MessageParser, ParserConfig, Payload, PayloadKind, RecognizerRegistry, SenderPolicy, Token,
    parse,
};

fn roster(names: &[&str]) -> Roster {
    Roster::from_identities(names.iter().map(|n| Identity::new(*n))).unwrap()
}

fn callsign(identity: Option<&Arc<Identity>>) -> Option<&str> {
    identity.map(|i| i.callsign.as_str())
}

#[test]
fn parse_empty_transmission() {
    let parser = MessageParser::standard();
    assert!(parser.parse("", &roster(&["ABC123"])).unwrap().is_none());
}

#[test]
fn parse_addressed_call() {
    let parser = MessageParser::standard();
    let msg = parser
        .parse("ABC123 DEF456 Hello World", &roster(&["ABC123", "DEF456"]))
        .unwrap()
        .unwrap();

    assert_eq!(callsign(msg.to()), Some("ABC123"));
    assert_eq!(callsign(msg.from()), Some("DEF456"));
    assert_eq!(msg.payload(), &Payload::uninterpreted("Hello World"));
    assert_eq!(msg.raw_text(), "ABC123 DEF456 Hello World");
}

#[test]
fn parse_acknowledgment() {
    let parser = MessageParser::standard();
    let msg = parser
        .parse("ABC123 roger", &roster(&["ABC123"]))
        .unwrap()
        .unwrap();

    assert_eq!(callsign(msg.from()), Some("ABC123"));
    assert!(msg.to().is_none());
    assert_eq!(msg.payload().kind(), PayloadKind::Acknowledgment);
}

#[test]
fn parse_multi_word_callsigns() {
    let parser = MessageParser::standard();
    let msg = parser
        .parse(
            "New York Center Delta Air Lines 123 request flight level 350",
            &roster(&["New York Center", "Delta Air Lines 123"]),
        )
        .unwrap()
        .unwrap();

    assert_eq!(callsign(msg.to()), Some("New York Center"));
    assert_eq!(callsign(msg.from()), Some("Delta Air Lines 123"));
    assert_eq!(msg.payload().raw_content(), "request flight level 350");
}

#[test]
fn parse_numeric_flight_callsigns() {
    let parser = MessageParser::standard();
    let msg = parser
        .parse(
            "Delta 123 Delta 456 request flight level 350",
            &roster(&["Delta 123", "Delta 456"]),
        )
        .unwrap()
        .unwrap();

    assert_eq!(callsign(msg.to()), Some("Delta 123"));
    assert_eq!(callsign(msg.from()), Some("Delta 456"));
}

#[test]
fn parse_chatter_with_embedded_callsign() {
    let parser = MessageParser::standard();
    let msg = parser
        .parse(
            "Hey Delta Charlie how are you doing Delta 456 sup",
            &roster(&["Delta Charlie 123", "Delta 456"]),
        )
        .unwrap()
        .unwrap();

    assert!(msg.from().is_none());
    assert!(msg.to().is_none());
    assert_eq!(
        msg.payload(),
        &Payload::uninterpreted("Hey Delta Charlie how are you doing Delta 456 sup")
    );
}

#[test]
fn parse_trailing_sender() {
    let parser = MessageParser::standard();
    let msg = parser
        .parse("Hello World ABC 123", &roster(&["ABC 123"]))
        .unwrap()
        .unwrap();

    assert_eq!(callsign(msg.from()), Some("ABC 123"));
    assert!(msg.to().is_none());
    assert_eq!(msg.payload().raw_content(), "Hello World");
}

#[test]
fn parse_startup_with_companions() {
    let parser = MessageParser::standard();
    let directory = roster(&["Tower", "GHI789", "JKL012", "MNO345"]);
    let msg = parser
        .parse("Tower GHI789 request startup with JKL012 and MNO345", &directory)
        .unwrap()
        .unwrap();

    assert_eq!(callsign(msg.to()), Some("Tower"));
    assert_eq!(callsign(msg.from()), Some("GHI789"));
    match msg.payload() {
        Payload::RequestStartup { companions, .. } => {
            assert_eq!(
                companions,
                &vec![Token::callsign("JKL012"), Token::callsign("MNO345")]
            );
        }
        other => panic!("expected startup request, got {other:?}"),
    }
}

#[test]
fn parse_startup_phrasings() {
    let parser = MessageParser::standard();
    let directory = roster(&["Tower", "GHI789"]);

    for raw in [
        "Tower GHI789 request startup",
        "Tower GHI789 requesting startup",
        "Tower GHI789 request engine start",
        "Tower GHI789 request power up",
        "Tower GHI789 request startup and weather information",
        "Tower GHI789 requesting engine start with weather",
        "Tower request startup GHI789",
        "GHI789 request startup",
    ] {
        let msg = parser.parse(raw, &directory).unwrap().unwrap();
        assert_eq!(msg.payload().kind(), PayloadKind::RequestStartup, "{raw}");
        assert_eq!(callsign(msg.from()), Some("GHI789"), "{raw}");
        match msg.payload() {
            Payload::RequestStartup { companions, .. } => assert!(companions.is_empty(), "{raw}"),
            other => panic!("expected startup request, got {other:?}"),
        }
    }
}

#[test]
fn lone_callsign_is_an_acknowledgment() {
    let parser = MessageParser::standard();
    let msg = parser.parse("GHI789", &roster(&["GHI789"])).unwrap().unwrap();

    assert_eq!(callsign(msg.from()), Some("GHI789"));
    assert_eq!(msg.payload(), &Payload::Acknowledgment { raw: String::new() });
}

#[test]
fn free_parse_uses_given_registry() {
    let directory = roster(&["ABC123"]);
    let msg = parse("ABC123 roger", &directory, &RecognizerRegistry::new())
        .unwrap()
        .unwrap();
    assert!(msg.payload().is_uninterpreted());
}

#[test]
fn sender_policy_fallback_keeps_recognized_calls() {
    let parser = MessageParser::standard().with_config(
        ParserConfig::default().with_sender_policy(SenderPolicy::RequiredForFallback),
    );
    let directory = roster(&["ABC123"]);

    assert!(parser.parse("radio check", &directory).unwrap().is_some());
    assert!(parser.parse("nice weather", &directory).unwrap().is_none());
    assert!(parser.parse("ABC123 nice weather", &directory).unwrap().is_some());
}

#[test]
fn message_display() {
    let parser = MessageParser::standard();
    let msg = parser
        .parse("Tower GHI789 say again", &roster(&["Tower", "GHI789"]))
        .unwrap()
        .unwrap();
    assert_eq!(msg.to_string(), "GHI789 -> Tower: say_again \"say again\"");
}

/// A directory over a fixed list, to exercise the trait seam.
struct Fixed(Vec<Arc<Identity>>);

impl Directory for Fixed {
    fn lookup(&self, name: &str) -> Option<Arc<Identity>> {
        self.0.iter().find(|i| i.callsign.as_str() == name).cloned()
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.0.iter().any(|i| i.callsign.as_str().starts_with(prefix))
    }
}

#[test]
fn custom_directory() {
    let directory = Fixed(vec![Arc::new(Identity::new("Speedbird 9").with_kind("B744"))]);
    let msg = MessageParser::standard()
        .parse("Speedbird 9 affirmative", &directory)
        .unwrap()
        .unwrap();

    assert_eq!(msg.from().unwrap().kind.as_deref(), Some("B744"));
    assert_eq!(msg.payload().kind(), PayloadKind::Acknowledgment);
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = MessageParser::standard();
    let directory = roster(&["Tower", "GHI789"]);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let msg = parser.parse("Tower GHI789 roger", &directory).unwrap().unwrap();
                assert_eq!(msg.payload().kind(), PayloadKind::Acknowledgment);
            });
        }
    });
}
