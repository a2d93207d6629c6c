use std::sync::LazyLock;

use regex::Regex;
use squawk_foundation::Result;

use super::{LazyPattern, compiled};
use crate::payload::Payload;
use crate::recognizer::Recognizer;
use crate::tokenizer::Token;

static RADIO_CHECK: LazyPattern =
    LazyLock::new(|| Regex::new(r"(?i)(radio check|check radio|do you copy)"));

/// Recognizes radio checks anywhere in the content.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadioCheckRecognizer;

impl Recognizer for RadioCheckRecognizer {
    fn name(&self) -> &str {
        "radio_check"
    }

    fn attempt(&self, content: &str, _tokens: &[Token]) -> Result<Option<Payload>> {
        let pattern = compiled(self.name(), &RADIO_CHECK)?;
        Ok(pattern
            .is_match(content)
            .then(|| Payload::RadioCheck { raw: content.to_string() }))
    }
}
