use std::{ffi::OsString, path::PathBuf};

/// A regular file seen while listing a single directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: OsString,
    pub path: PathBuf,
    pub size: u64,
}

impl FileInfo {
    pub fn new(name: impl Into<OsString>, path: impl Into<PathBuf>, size: u64) -> Self {
        FileInfo {
            name: name.into(),
            path: path.into(),
            size,
        }
    }

    /// The name exactly as the filesystem returned it, used for ordering.
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_encoded_bytes()
    }
}
