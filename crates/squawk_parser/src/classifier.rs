//! Payload classification.
//!
//! Runs message content through a [`RecognizerRegistry`] and keeps the first
//! interpretation offered.

use tracing::{debug, warn};

use crate::payload::Payload;
use crate::recognizer::RecognizerRegistry;
use crate::tokenizer::Token;

/// Picks a payload for message content.
pub struct PayloadClassifier;

impl PayloadClassifier {
    /// Classifies content, falling back to [`Payload::Uninterpreted`].
    #[must_use]
    pub fn classify(content: &str, tokens: &[Token], registry: &RecognizerRegistry) -> Payload {
        Self::classify_matched(content, tokens, registry)
            .unwrap_or_else(|| Payload::uninterpreted(content))
    }

    /// Returns the first recognizer's payload, or `None` if nothing matched.
    ///
    /// A recognizer that fails is logged and skipped.
    #[must_use]
    pub fn classify_matched(
        content: &str,
        tokens: &[Token],
        registry: &RecognizerRegistry,
    ) -> Option<Payload> {
        for recognizer in registry.iter() {
            match recognizer.attempt(content, tokens) {
                Ok(Some(payload)) => {
                    debug!(
                        recognizer = recognizer.name(),
                        kind = %payload.kind(),
                        "content recognized"
                    );
                    return Some(payload);
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        recognizer = recognizer.name(),
                        error = %err,
                        "recognizer failed; trying the next one"
                    );
                }
            }
        }

        debug!(content, "no recognizer matched");
        None
    }
}
