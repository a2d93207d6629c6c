//! Speaker and addressee inference.
//!
//! Radio calls put callsigns in a few conventional places:
//!
//! ```text
//! <to> <from> <content...>      "Tower GHI789 request startup"
//! <to> <content...> <from>      "Tower request startup GHI789"
//! <from> <content...>           "GHI789 request startup"
//! <content...> <from>           "request startup GHI789"
//! <content...>                  "request startup"
//! ```
//!
//! Roles are assigned purely by position and token class. Which
//! communicator a callsign names plays no part.

use std::ops::Range;

use tracing::debug;

use crate::tokenizer::Token;

/// Outcome of role resolution, as indices into the token sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roles {
    /// Index of the sender's callsign token.
    pub from: Option<usize>,
    /// Index of the addressee's callsign token.
    pub to: Option<usize>,
    /// Tokens making up the message body.
    pub content: Range<usize>,
}

impl Roles {
    /// The sender's callsign, read back from `tokens`.
    #[must_use]
    pub fn from_name<'t>(&self, tokens: &'t [Token]) -> Option<&'t str> {
        self.from.map(|i| tokens[i].content())
    }

    /// The addressee's callsign, read back from `tokens`.
    #[must_use]
    pub fn to_name<'t>(&self, tokens: &'t [Token]) -> Option<&'t str> {
        self.to.map(|i| tokens[i].content())
    }

    /// The message body tokens.
    #[must_use]
    pub fn content_tokens<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        &tokens[self.content.clone()]
    }
}

/// Assigns sender and addressee roles to callsign tokens.
pub struct RoleResolver;

impl RoleResolver {
    /// Resolves roles for a token sequence. Never fails; unresolved roles
    /// are `None`.
    #[must_use]
    pub fn resolve(tokens: &[Token]) -> Roles {
        let len = tokens.len();
        let mut roles = Roles {
            from: None,
            to: None,
            content: 0..len,
        };

        match tokens {
            [] => {}
            [only] => {
                if only.is_callsign() {
                    roles.from = Some(0);
                    roles.content = 1..1;
                }
            }
            [first, second, ..] => {
                let last = len - 1;
                let last_is_callsign = tokens[last].is_callsign();

                if first.is_callsign() && !second.is_callsign() {
                    if last_is_callsign {
                        roles.to = Some(0);
                        roles.from = Some(last);
                        roles.content = 1..last;
                    } else {
                        roles.from = Some(0);
                        roles.content = 1..len;
                    }
                } else if first.is_callsign() && second.is_callsign() {
                    roles.to = Some(0);
                    roles.from = Some(1);
                    roles.content = 2..len;
                }

                // A trailing callsign is the sender when nothing else claimed it.
                if roles.from.is_none() && last_is_callsign {
                    roles.from = Some(last);
                    roles.content.end = last;
                }
            }
        }

        debug!(
            from = roles.from_name(tokens),
            to = roles.to_name(tokens),
            content = ?roles.content,
            "resolved roles"
        );
        roles
    }
}
