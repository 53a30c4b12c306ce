//! Temp-file handoff between the launcher and the resolver.
//!
//! The launcher allocates a uniquely named empty file and passes its path to
//! the resolver with `--temp-file`. The resolver replaces the contents with a
//! single line naming the directory to change into, or leaves it empty.
//!
//! Wire convention: UTF-8, only the first line is read, a trailing `\n` or
//! `\r\n` is dropped and nothing else is trimmed. An empty first line means
//! the resolver chose no directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

const PREFIX: &str = "goto-";
const SUFFIX: &str = ".path";

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Failed to create handoff file: {0}")]
    Create(#[source] io::Error),

    #[error("Failed to read handoff file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Handoff file {path:?} is not valid UTF-8")]
    Encoding { path: PathBuf },

    #[error("Failed to remove handoff file: {0}")]
    Remove(#[source] io::Error),
}

/// A scoped handoff file. The file is removed when this value is consumed by
/// [`HandoffFile::take`] or dropped.
#[derive(Debug)]
pub struct HandoffFile {
    file: NamedTempFile,
}

impl HandoffFile {
    /// Allocate a new empty handoff file in the system temp directory
    pub fn create() -> Result<Self, HandoffError> {
        let file = tempfile::Builder::new()
            .prefix(PREFIX)
            .suffix(SUFFIX)
            .tempfile()
            .map_err(HandoffError::Create)?;
        tracing::debug!(path = ?file.path(), "created handoff file");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the resolver's answer and delete the file.
    ///
    /// The file is deleted even when reading fails.
    pub fn take(self) -> Result<Option<String>, HandoffError> {
        let path = self.file.path().to_path_buf();
        let read = fs::read(&path);

        self.file.close().map_err(HandoffError::Remove)?;
        tracing::debug!(path = ?path, "removed handoff file");

        let bytes = read.map_err(|source| HandoffError::Read {
            path: path.clone(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|_| HandoffError::Encoding { path })?;

        Ok(parse(&content).map(str::to_string))
    }
}

/// Extract the candidate path from handoff content
pub fn parse(content: &str) -> Option<&str> {
    let line = content.split('\n').next().unwrap_or_default();
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Replace the contents of the handoff file at `path` with `destination`
pub fn write_destination(path: &Path, destination: &Path) -> io::Result<()> {
    fs::write(path, format!("{}\n", destination.display()))
}
