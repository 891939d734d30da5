use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DedupError {
    #[error("'{0}' does not exist or is not a directory")]
    InvalidRoot(PathBuf),

    #[error("cannot read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compute hash of {path}: {source}")]
    HashCompute {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to delete {path}: {source}")]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}
