//! Interactive console, roster files, and CLI for Squawk.
//!
//! This crate provides:
//! - [`Console`] - Interactive read-parse-print loop over radio transmissions
//! - Roster import from JSON and snapshot save/load in `MessagePack`
//! - The `squawk` command-line entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod editor;
pub mod roster_file;

pub use console::{Console, Reply};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
