use std::sync::LazyLock;

use regex::Regex;
use squawk_foundation::Result;

use super::{LazyPattern, compiled};
use crate::payload::Payload;
use crate::recognizer::Recognizer;
use crate::tokenizer::Token;

static REQUEST_STARTUP: LazyPattern = LazyLock::new(|| {
    Regex::new(
        r"(?i)request(ing)? (engine )?(start|power)( )?(up)?( (and|with) weather( info(rmation)?)?)?",
    )
});

/// Recognizes startup requests.
///
/// Any callsigns inside the content ("request startup with JKL012 and
/// MNO345") are the rest of the flight and become the payload's companions.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestStartupRecognizer;

impl Recognizer for RequestStartupRecognizer {
    fn name(&self) -> &str {
        "request_startup"
    }

    fn attempt(&self, content: &str, tokens: &[Token]) -> Result<Option<Payload>> {
        let pattern = compiled(self.name(), &REQUEST_STARTUP)?;
        if !pattern.is_match(content) {
            return Ok(None);
        }

        let companions = tokens.iter().filter(|t| t.is_callsign()).cloned().collect();
        Ok(Some(Payload::RequestStartup {
            raw: content.to_string(),
            companions,
        }))
    }
}
