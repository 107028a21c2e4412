//! Append-only log file writes
//!
//! Every call opens, writes and closes the file. No handle is kept between
//! calls and nothing coordinates concurrent writers to the same path.

use std::fs::{self, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use tempfile::NamedTempFile;

use super::error::SinkResult;

/// Written instead of an entry whose content could not be encoded
pub const ENCODING_SENTINEL: &str = "ERROR CONVERTING TO DATA";

/// Per-user directory log files live in, resolved once per process
static DEFAULT_DIRECTORY: Lazy<PathBuf> = Lazy::new(|| {
    dirs::document_dir()
        .or_else(dirs::data_dir)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
});

/// Directory used by loggers without an explicit directory
pub fn default_directory() -> &'static Path {
    &DEFAULT_DIRECTORY
}

/// What an append did to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The file did not exist and now holds exactly the entry
    Created,
    /// A newline and the entry were added after the existing content
    Appended,
}

/// Append one rendered entry to `path`
///
/// `entry` is `None` when the content could not be encoded; the sentinel is
/// written in its place. An existing file gets `"\n" + entry` at its end; a
/// missing file is created atomically with the entry as its whole content.
pub fn append_entry(path: &Path, entry: Option<&str>) -> SinkResult<AppendOutcome> {
    if path.exists() {
        let payload = match entry {
            Some(text) => format!("\n{text}"),
            None => ENCODING_SENTINEL.to_string(),
        };

        let mut file = OpenOptions::new().write(true).open(path)?;
        file.seek(SeekFrom::End(0))?;
        file.write_all(payload.as_bytes())?;
        file.flush()?;
        Ok(AppendOutcome::Appended)
    } else {
        create_atomically(path, entry.unwrap_or(ENCODING_SENTINEL))?;
        Ok(AppendOutcome::Created)
    }
}

fn create_atomically(path: &Path, contents: &str) -> SinkResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.flush()?;
    // Another writer may have created the file meanwhile; never clobber it.
    staged.persist_noclobber(path)?;
    Ok(())
}
