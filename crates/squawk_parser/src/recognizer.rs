//! Recognizer plug-in contract and registry.
//!
//! A recognizer attempts one interpretation of message content. Recognizers
//! are registered in an explicit order; the classifier asks each in turn and
//! takes the first answer.

use std::fmt;

use squawk_foundation::Result;

use crate::payload::Payload;
use crate::tokenizer::Token;

/// Attempts one interpretation of message content.
///
/// Implementations must not keep mutable state: the same recognizer may be
/// shared by parses running on different threads.
pub trait Recognizer: Send + Sync {
    /// Name used in logs and error reports.
    fn name(&self) -> &str;

    /// Tries to interpret `content` (the message body text) given its
    /// `tokens`.
    ///
    /// Returns `Ok(None)` when the content is not this recognizer's kind of
    /// message.
    ///
    /// # Errors
    ///
    /// Returns an error if the recognizer cannot do its job. The classifier
    /// treats that as no match and moves on.
    fn attempt(&self, content: &str, tokens: &[Token]) -> Result<Option<Payload>>;
}

/// Adapts a closure into a [`Recognizer`].
pub struct FnRecognizer<F> {
    name: String,
    f: F,
}

impl<F> FnRecognizer<F>
where
    F: Fn(&str, &[Token]) -> Option<Payload> + Send + Sync,
{
    /// Wraps `f` under the given name.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Recognizer for FnRecognizer<F>
where
    F: Fn(&str, &[Token]) -> Option<Payload> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn attempt(&self, content: &str, tokens: &[Token]) -> Result<Option<Payload>> {
        Ok((self.f)(content, tokens))
    }
}

/// Ordered collection of recognizers. Earlier registrations win.
#[derive(Default)]
pub struct RecognizerRegistry {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl RecognizerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard recognizers, in the order
    /// radio check, request startup, say again, acknowledgment.
    #[must_use]
    pub fn standard() -> Self {
        crate::recognizers::standard_registry()
    }

    /// Appends a recognizer after all previously registered ones.
    pub fn register(&mut self, recognizer: impl Recognizer + 'static) {
        self.recognizers.push(Box::new(recognizer));
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, recognizer: impl Recognizer + 'static) -> Self {
        self.register(recognizer);
        self
    }

    /// Iterates recognizers in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Recognizer>> {
        self.recognizers.iter()
    }

    /// Names of the registered recognizers, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// Number of registered recognizers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }
}

impl fmt::Debug for RecognizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Finds the earliest token position where one of `phrases` matches.
///
/// Each phrase is a sequence of words that must match consecutive tokens
/// exactly, ignoring case. At each position the phrases are tried in the
/// order given. Empty phrases never match.
#[must_use]
pub fn find_phrase(tokens: &[Token], phrases: &[&[&str]]) -> Option<usize> {
    (0..tokens.len()).find(|&start| {
        let rest = &tokens[start..];
        phrases.iter().any(|phrase| {
            !phrase.is_empty()
                && phrase.len() <= rest.len()
                && phrase
                    .iter()
                    .zip(rest)
                    .all(|(word, token)| eq_ignore_case(word, token.content()))
        })
    })
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
