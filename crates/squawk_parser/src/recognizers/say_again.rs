use squawk_foundation::Result;

use crate::payload::Payload;
use crate::recognizer::{Recognizer, find_phrase};
use crate::tokenizer::Token;

const PHRASES: &[&[&str]] = &[&["say", "again"], &["repeat"], &["say", "that", "again"]];

/// Recognizes requests to repeat the last transmission.
#[derive(Clone, Copy, Debug, Default)]
pub struct SayAgainRecognizer;

impl Recognizer for SayAgainRecognizer {
    fn name(&self) -> &str {
        "say_again"
    }

    fn attempt(&self, content: &str, tokens: &[Token]) -> Result<Option<Payload>> {
        Ok(find_phrase(tokens, PHRASES).map(|_| Payload::SayAgain {
            raw: content.to_string(),
        }))
    }
}
