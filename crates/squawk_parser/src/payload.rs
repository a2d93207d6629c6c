//! Structured interpretations of message content.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;

/// What a message says, as understood by the first recognizer that matched.
///
/// Every variant keeps the content text it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Payload {
    /// No recognizer claimed the content.
    Uninterpreted {
        /// Content text
        raw: String,
    },
    /// "roger", "affirmative", "copy".
    Acknowledgment {
        /// Content text
        raw: String,
    },
    /// "say again", "repeat".
    SayAgain {
        /// Content text
        raw: String,
    },
    /// "radio check", "do you copy".
    RadioCheck {
        /// Content text
        raw: String,
    },
    /// Request for engine startup, possibly for a whole flight.
    RequestStartup {
        /// Content text
        raw: String,
        /// Callsigns named in the request besides the sender
        companions: Vec<Token>,
    },
}

impl Payload {
    /// Creates the fallback payload.
    #[must_use]
    pub fn uninterpreted(raw: impl Into<String>) -> Self {
        Self::Uninterpreted { raw: raw.into() }
    }

    /// The content text this payload was derived from.
    #[must_use]
    pub fn raw_content(&self) -> &str {
        match self {
            Self::Uninterpreted { raw }
            | Self::Acknowledgment { raw }
            | Self::SayAgain { raw }
            | Self::RadioCheck { raw }
            | Self::RequestStartup { raw, .. } => raw,
        }
    }

    /// The variant, without its data.
    #[must_use]
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Uninterpreted { .. } => PayloadKind::Uninterpreted,
            Self::Acknowledgment { .. } => PayloadKind::Acknowledgment,
            Self::SayAgain { .. } => PayloadKind::SayAgain,
            Self::RadioCheck { .. } => PayloadKind::RadioCheck,
            Self::RequestStartup { .. } => PayloadKind::RequestStartup,
        }
    }

    /// Whether this is the fallback payload.
    #[must_use]
    pub fn is_uninterpreted(&self) -> bool {
        matches!(self, Self::Uninterpreted { .. })
    }
}

/// Payload variant discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// See [`Payload::Uninterpreted`].
    Uninterpreted,
    /// See [`Payload::Acknowledgment`].
    Acknowledgment,
    /// See [`Payload::SayAgain`].
    SayAgain,
    /// See [`Payload::RadioCheck`].
    RadioCheck,
    /// See [`Payload::RequestStartup`].
    RequestStartup,
}

impl PayloadKind {
    /// Stable lowercase name, used in logs and console output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uninterpreted => "uninterpreted",
            Self::Acknowledgment => "acknowledgment",
            Self::SayAgain => "say_again",
            Self::RadioCheck => "radio_check",
            Self::RequestStartup => "request_startup",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
