use std::io;
use std::path::PathBuf;

use dialr_common::rotation::RotationParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("Can't read from file '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was opened but reading it failed part way through.
    #[error("failed while reading '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed rotation on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: RotationParseError,
    },
}

impl InputError {
    pub fn is_file_access(&self) -> bool {
        matches!(self, InputError::FileAccess { .. })
    }
}
