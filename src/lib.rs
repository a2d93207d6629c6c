//! Squawk - Radio transmission parsing
//!
//! This crate re-exports all layers of the Squawk system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: squawk_runtime    - Console, roster files, CLI
//! Layer 1: squawk_parser     - Tokenizer, roles, recognizers, messages
//! Layer 0: squawk_foundation - Callsigns, roster directory, errors
//! ```

pub use squawk_foundation as foundation;
pub use squawk_parser as parser;
pub use squawk_runtime as runtime;
