//! Roster files.
//!
//! Two formats are supported:
//! - JSON, for hand-written rosters: `[{"callsign": "Tower", "kind": "ATC"}, ...]`
//! - `MessagePack`, for snapshots saved from the console
//!
//! [`load`] picks the format from the file extension.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use squawk_foundation::{Error, ErrorKind, Result, Roster};
use tracing::info;

/// Serializes a roster to bytes using `MessagePack` format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(roster: &Roster) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(roster)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a roster from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the snapshot holds
/// duplicate callsigns.
pub fn from_bytes(bytes: &[u8]) -> Result<Roster> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Parses a JSON roster.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or lists a callsign twice.
pub fn from_json(text: &str) -> Result<Roster> {
    serde_json::from_str(text)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Saves a roster snapshot to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(roster: &Roster, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(roster)?;

    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;

    info!(path = %path.display(), callsigns = roster.len(), "saved roster snapshot");
    Ok(())
}

/// Loads a roster snapshot from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    from_bytes(&bytes)
}

/// Loads a JSON roster file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid roster.
pub fn import_json<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| io_error("read", path, &e))?;
    let roster = from_json(&text)?;
    info!(path = %path.display(), callsigns = roster.len(), "imported roster");
    Ok(roster)
}

/// Loads a roster, choosing JSON for `.json` files and `MessagePack`
/// otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        import_json(path)
    } else {
        load_from_file(path)
    }
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!(
        "failed to {action} file '{}': {e}",
        path.display()
    )))
}
