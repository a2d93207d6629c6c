//! Transmission tokenization.
//!
//! Splits raw radio text into tokens, folding multi-word callsigns known to
//! the [`Directory`] into single tokens.

use squawk_foundation::Directory;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A token from a transmission: either a whole callsign or one bare word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    is_callsign: bool,
    content: String,
}

impl Token {
    /// Creates a callsign token. `name` must be a name the directory knows.
    #[must_use]
    pub fn callsign(name: impl Into<String>) -> Self {
        Self {
            is_callsign: true,
            content: name.into(),
        }
    }

    /// Creates a bare word token.
    #[must_use]
    pub fn word(word: impl Into<String>) -> Self {
        Self {
            is_callsign: false,
            content: word.into(),
        }
    }

    /// Whether this token is a recognized callsign.
    #[must_use]
    pub fn is_callsign(&self) -> bool {
        self.is_callsign
    }

    /// The token text. For callsigns, the full (possibly multi-word) name.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Joins token contents with single spaces.
    #[must_use]
    pub fn join(tokens: &[Token]) -> String {
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&token.content);
        }
        out
    }
}

/// Splits transmissions into [`Token`]s.
pub struct CallsignTokenizer;

impl CallsignTokenizer {
    /// Splits a raw transmission into tokens.
    ///
    /// Words are separated by single spaces; no other normalization is
    /// done. Starting from each word, the window grows one word at a time
    /// while the joined text is still the beginning of some known callsign,
    /// remembering the longest exact match seen on the way. When the window
    /// can no longer grow, that longest match becomes a callsign token; if
    /// there was none, only the window's first word is emitted. Matching
    /// then restarts right after what was emitted. Nothing is ever re-split.
    #[must_use]
    pub fn split<D: Directory + ?Sized>(raw: &str, directory: &D) -> Vec<Token> {
        if raw.is_empty() {
            return Vec::new();
        }

        let words: Vec<&str> = raw.split(' ').collect();
        let mut tokens = Vec::with_capacity(words.len());
        let mut start = 0;

        while start < words.len() {
            let mut end = start;
            let mut longest = None;

            loop {
                let candidate = words[start..=end].join(" ");
                let exact = directory.lookup(&candidate).is_some();
                if exact {
                    longest = Some(end);
                }

                // Past an exact match, only a longer name is worth extending for.
                let live = if exact {
                    directory.has_prefix(&format!("{candidate} "))
                } else {
                    directory.has_prefix(&candidate)
                };
                if end + 1 < words.len() && live {
                    end += 1;
                    continue;
                }

                if longest.is_none() && end > start {
                    trace!(window = %candidate, "callsign prefix diverged");
                }
                break;
            }

            match longest {
                Some(last) => {
                    let name = words[start..=last].join(" ");
                    trace!(callsign = %name, "matched callsign");
                    tokens.push(Token::callsign(name));
                    start = last + 1;
                }
                None => {
                    tokens.push(Token::word(words[start]));
                    start += 1;
                }
            }
        }

        tokens
    }
}
