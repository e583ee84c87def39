use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure to read a source file. Nothing past the read can fail: missing
/// metadata is defaulted or deduced instead.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("source file not found: {path:?}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read source file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ParseError::NotFound { path, source },
            _ => ParseError::Io { path, source },
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            ParseError::NotFound { path, .. } | ParseError::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ParseError::NotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum CollectError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
