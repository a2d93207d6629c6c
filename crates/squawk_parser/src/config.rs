//! Configuration for the message parser.

use std::fmt;
use std::str::FromStr;

use squawk_foundation::{Error, Result};

/// How much a message needs a known sender before it is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SenderPolicy {
    /// Any non-empty transmission produces a message, sender or not.
    #[default]
    Optional,
    /// Recognized content always produces a message; uninterpreted content
    /// only does when a sender was placed.
    RequiredForFallback,
    /// No sender, no message.
    Required,
}

impl SenderPolicy {
    /// Stable lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::RequiredForFallback => "fallback",
            Self::Required => "required",
        }
    }
}

impl fmt::Display for SenderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SenderPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "optional" => Ok(Self::Optional),
            "fallback" => Ok(Self::RequiredForFallback),
            "required" => Ok(Self::Required),
            other => Err(Error::internal(format!(
                "unknown sender policy '{other}' (expected optional, fallback or required)"
            ))),
        }
    }
}

/// Configuration for [`MessageParser`](crate::MessageParser).
#[derive(Clone, Debug, Default)]
pub struct ParserConfig {
    /// When a message without a sender is still reported.
    pub sender_policy: SenderPolicy,
}

impl ParserConfig {
    /// Creates a configuration that drops every message without a sender.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            sender_policy: SenderPolicy::Required,
        }
    }

    /// Builder method to set the sender policy.
    #[must_use]
    pub fn with_sender_policy(mut self, policy: SenderPolicy) -> Self {
        self.sender_policy = policy;
        self
    }
}
