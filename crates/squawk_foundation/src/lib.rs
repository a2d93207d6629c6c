//! Core types, errors, and the communicator roster for Squawk.
//!
//! This crate provides:
//! - [`Callsign`] - The name a communicating party answers to
//! - [`Identity`] - A known communicator, keyed by its callsign
//! - [`Directory`] - Lookup interface consumed by the message parser
//! - [`Roster`] - A persistent, snapshot-friendly [`Directory`]
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod callsign;
pub mod directory;
pub mod error;

pub use callsign::{Callsign, Identity};
pub use directory::{Directory, Roster};
pub use error::{Error, ErrorContext, ErrorKind, Result};
