//! Standard recognizers for common radio phraseology.
//!
//! - [`RadioCheckRecognizer`] - "radio check", "do you copy"
//! - [`RequestStartupRecognizer`] - "request startup", "requesting engine start with weather"
//! - [`SayAgainRecognizer`] - "say again", "repeat"
//! - [`AcknowledgmentRecognizer`] - "roger", "affirmative", "copy"

mod acknowledgment;
mod radio_check;
mod request_startup;
mod say_again;

use std::sync::LazyLock;

use regex::Regex;
use squawk_foundation::{Error, Result};

use crate::recognizer::RecognizerRegistry;

pub use acknowledgment::AcknowledgmentRecognizer;
pub use radio_check::RadioCheckRecognizer;
pub use request_startup::RequestStartupRecognizer;
pub use say_again::SayAgainRecognizer;

/// A lazily compiled pattern. A pattern that fails to compile surfaces as a
/// recognizer error on every attempt instead of a panic.
type LazyPattern = LazyLock<std::result::Result<Regex, regex::Error>>;

fn compiled<'p>(name: &str, pattern: &'p LazyPattern) -> Result<&'p Regex> {
    LazyLock::force(pattern)
        .as_ref()
        .map_err(|e| Error::recognizer(name, e.to_string()))
}

/// The standard recognizers, most specific first.
///
/// "do you copy" must reach the radio check before the acknowledgment
/// recognizer sees "copy", and a readback that also requests startup is a
/// startup request.
pub(crate) fn standard_registry() -> RecognizerRegistry {
    RecognizerRegistry::new()
        .with(RadioCheckRecognizer)
        .with(RequestStartupRecognizer)
        .with(SayAgainRecognizer)
        .with(AcknowledgmentRecognizer)
}
