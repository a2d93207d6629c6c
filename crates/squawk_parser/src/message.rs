//! Parsed messages and their assembly.

use std::fmt;
use std::sync::Arc;

use squawk_foundation::{Directory, Error, ErrorContext, Identity, Result};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::payload::Payload;

/// An understood transmission.
///
/// `from` and `to` are independently optional: a call may name only its
/// sender, only its addressee, both, or neither. The payload is always
/// present.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Message {
    raw_text: String,
    from: Option<Arc<Identity>>,
    to: Option<Arc<Identity>>,
    payload: Payload,
}

impl Message {
    /// The transmission exactly as received.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The sender, if one could be placed.
    #[must_use]
    pub fn from(&self) -> Option<&Arc<Identity>> {
        self.from.as_ref()
    }

    /// The addressee, if one could be placed.
    #[must_use]
    pub fn to(&self) -> Option<&Arc<Identity>> {
        self.to.as_ref()
    }

    /// What the message says.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |who: &Option<Arc<Identity>>| {
            who.as_ref()
                .map_or_else(|| "?".to_string(), |i| i.callsign.to_string())
        };
        write!(
            f,
            "{} -> {}: {} \"{}\"",
            name(&self.from),
            name(&self.to),
            self.payload.kind(),
            self.payload.raw_content()
        )
    }
}

/// Builds [`Message`]s from resolved parts.
pub struct MessageAssembler;

impl MessageAssembler {
    /// Assembles a message.
    ///
    /// `payload` is `None` when there was nothing to classify; no message is
    /// produced then. Roles that were not resolved stay absent.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a sender or addressee name is not in the
    /// directory. Names reaching here were matched against the same
    /// directory moments earlier, so this only happens if the directory was
    /// changed mid-parse.
    pub fn assemble<D: Directory + ?Sized>(
        raw_text: &str,
        from_name: Option<&str>,
        to_name: Option<&str>,
        directory: &D,
        payload: Option<Payload>,
    ) -> Result<Option<Message>> {
        let Some(payload) = payload else {
            return Ok(None);
        };

        let from = Self::identify(raw_text, from_name, directory)?;
        let to = Self::identify(raw_text, to_name, directory)?;

        Ok(Some(Message {
            raw_text: raw_text.to_string(),
            from,
            to,
            payload,
        }))
    }

    fn identify<D: Directory + ?Sized>(
        raw_text: &str,
        name: Option<&str>,
        directory: &D,
    ) -> Result<Option<Arc<Identity>>> {
        let Some(name) = name else {
            return Ok(None);
        };
        directory.lookup(name).map(Some).ok_or_else(|| {
            Error::internal(format!("callsign {name} vanished from the directory"))
                .with_context(
                    ErrorContext::new()
                        .with_source("message assembly")
                        .with_input(raw_text),
                )
        })
    }
}
