//! Message understanding for radio calls.
//!
//! This crate turns a transmission like "Tower GHI789 request startup" into
//! a [`Message`]: who is speaking, who is addressed, and what was asked.
//!
//! # Architecture
//!
//! ```text
//! "Tower GHI789 request startup"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [Callsign(Tower), Callsign(GHI789), request, startup]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ROLE            │  → to: Tower, from: GHI789, content: "request startup"
//! │ RESOLUTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PAYLOAD         │  → RequestStartup { companions: [] }
//! │ CLASSIFICATION  │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MESSAGE         │  → Message { from, to, payload }
//! │ ASSEMBLY        │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw text into callsign and word tokens
//! - [`roles`] - Positional sender/addressee inference
//! - [`payload`] - Structured interpretations of message content
//! - [`recognizer`] - Recognizer plug-in contract, registry, phrase matching
//! - [`classifier`] - First-match-wins payload classification
//! - [`message`] - Final message type and assembly
//! - [`config`] - Parser configuration
//! - [`parser`] - Pipeline orchestration
//! - [`recognizers`] - Standard recognizers for common radio phraseology

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classifier;
pub mod config;
pub mod message;
pub mod parser;
pub mod payload;
pub mod recognizer;
pub mod recognizers;
pub mod roles;
pub mod tokenizer;

// Re-export main types for convenience
pub use classifier::PayloadClassifier;
pub use config::{ParserConfig, SenderPolicy};
pub use message::{Message, MessageAssembler};
pub use parser::{MessageParser, parse};
pub use payload::{Payload, PayloadKind};
pub use recognizer::{FnRecognizer, Recognizer, RecognizerRegistry, find_phrase};
pub use roles::{RoleResolver, Roles};
pub use tokenizer::{CallsignTokenizer, Token};
