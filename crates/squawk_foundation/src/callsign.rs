//! Callsigns and communicator identities.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The name a communicating party answers to on the radio.
///
/// Callsigns may span several words ("Delta Air Lines 123"). Comparison is
/// exact and case-sensitive; the words are stored joined by single spaces.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Callsign(String);

impl Callsign {
    /// Creates a callsign from its spoken form.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the callsign text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callsign({:?})", self.0)
    }
}

impl fmt::Display for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Callsign {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Callsign {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Callsign {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A known communicator: an aircraft, a controller position, a ground crew.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identity {
    /// Unique name, used as the directory key.
    pub callsign: Callsign,
    /// Free-form description (airframe type, "ATC", ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: Option<String>,
}

impl Identity {
    /// Creates an identity with no description.
    #[must_use]
    pub fn new(callsign: impl Into<Callsign>) -> Self {
        Self {
            callsign: callsign.into(),
            kind: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{} ({kind})", self.callsign),
            None => write!(f, "{}", self.callsign),
        }
    }
}
