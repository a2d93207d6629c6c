//! Main parser pipeline.
//!
//! Orchestrates the full flow from raw transmission to [`Message`].

use squawk_foundation::{Directory, Result};
use tracing::debug;

use crate::classifier::PayloadClassifier;
use crate::config::{ParserConfig, SenderPolicy};
use crate::message::{Message, MessageAssembler};
use crate::payload::Payload;
use crate::recognizer::RecognizerRegistry;
use crate::roles::RoleResolver;
use crate::tokenizer::{CallsignTokenizer, Token};

/// Parses radio transmissions into [`Message`]s.
///
/// The parser owns its recognizers and configuration and nothing else;
/// the directory is borrowed per call. One parser can serve any number of
/// threads.
#[derive(Debug, Default)]
pub struct MessageParser {
    recognizers: RecognizerRegistry,
    config: ParserConfig,
}

impl MessageParser {
    /// Creates a parser with the given recognizers and default config.
    #[must_use]
    pub fn new(recognizers: RecognizerRegistry) -> Self {
        Self {
            recognizers,
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with the standard recognizers.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RecognizerRegistry::standard())
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Gets a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut ParserConfig {
        &mut self.config
    }

    /// Gets the recognizers.
    #[must_use]
    pub fn recognizers(&self) -> &RecognizerRegistry {
        &self.recognizers
    }

    /// Tokenizes a transmission without interpreting it.
    #[must_use]
    pub fn tokenize<D: Directory + ?Sized>(&self, raw: &str, directory: &D) -> Vec<Token> {
        CallsignTokenizer::split(raw, directory)
    }

    /// Parses a transmission.
    ///
    /// Returns `Ok(None)` for empty input, and for sender-less input when
    /// the [`SenderPolicy`] asks for a sender.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the directory changes during the call.
    pub fn parse<D: Directory + ?Sized>(&self, raw: &str, directory: &D) -> Result<Option<Message>> {
        run(raw, directory, &self.recognizers, &self.config)
    }
}

/// Parses a transmission with the default configuration.
///
/// # Errors
///
/// Returns an internal error if the directory changes during the call.
pub fn parse<D: Directory + ?Sized>(
    raw: &str,
    directory: &D,
    recognizers: &RecognizerRegistry,
) -> Result<Option<Message>> {
    run(raw, directory, recognizers, &ParserConfig::default())
}

fn run<D: Directory + ?Sized>(
    raw: &str,
    directory: &D,
    recognizers: &RecognizerRegistry,
    config: &ParserConfig,
) -> Result<Option<Message>> {
    // 1. Tokenize
    let tokens = CallsignTokenizer::split(raw, directory);
    if tokens.is_empty() {
        debug!("empty transmission");
        return Ok(None);
    }

    // 2. Place sender and addressee
    let roles = RoleResolver::resolve(&tokens);
    if roles.from.is_none() && config.sender_policy == SenderPolicy::Required {
        debug!(raw, "no sender; dropping transmission");
        return Ok(None);
    }

    // 3. Classify the body
    let content_tokens = roles.content_tokens(&tokens);
    let content = Token::join(content_tokens);
    let payload = match PayloadClassifier::classify_matched(&content, content_tokens, recognizers) {
        Some(payload) => Some(payload),
        None if roles.from.is_none()
            && config.sender_policy == SenderPolicy::RequiredForFallback =>
        {
            debug!(raw, "uninterpreted and no sender; dropping transmission");
            None
        }
        None => Some(Payload::uninterpreted(content)),
    };

    // 4. Assemble
    MessageAssembler::assemble(
        raw,
        roles.from_name(&tokens),
        roles.to_name(&tokens),
        directory,
        payload,
    )
}
