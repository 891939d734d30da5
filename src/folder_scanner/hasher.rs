use std::{
    fs::File,
    io::{self, ErrorKind, Read},
    path::Path,
};

use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};

use crate::error::DedupError;

const BUFFER_SIZE: usize = 64 * 1024;

pub trait ContentHasher {
    /// Returns the lowercase hex digest of the file's full content.
    fn hash(&self, path: &Path) -> Result<String, DedupError>;
}

/// Streams a file through SHA-256 without loading it into memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    fn hash(&self, path: &Path) -> Result<String, DedupError> {
        let to_error = |source: io::Error| DedupError::HashCompute {
            path: path.to_path_buf(),
            source,
        };

        let mut handle = File::open(path).map_err(to_error)?;
        let mut context = Context::new(&SHA256);
        let mut buffer = vec![0u8; BUFFER_SIZE];

        loop {
            match handle.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => context.update(&buffer[..read]),
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(to_error(error)),
            }
        }

        let digest = context.finish();
        Ok(HEXLOWER.encode(digest.as_ref()))
    }
}
