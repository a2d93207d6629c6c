use squawk_foundation::Result;

use crate::payload::Payload;
use crate::recognizer::{Recognizer, find_phrase};
use crate::tokenizer::Token;

const PHRASES: &[&[&str]] = &[&["roger"], &["affirmative"], &["copy"]];

/// Recognizes acknowledgments.
///
/// A call that is nothing but a callsign leaves empty content; that counts
/// as an acknowledgment too.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcknowledgmentRecognizer;

impl Recognizer for AcknowledgmentRecognizer {
    fn name(&self) -> &str {
        "acknowledgment"
    }

    fn attempt(&self, content: &str, tokens: &[Token]) -> Result<Option<Payload>> {
        if tokens.is_empty() || find_phrase(tokens, PHRASES).is_some() {
            return Ok(Some(Payload::Acknowledgment {
                raw: content.to_string(),
            }));
        }
        Ok(None)
    }
}
