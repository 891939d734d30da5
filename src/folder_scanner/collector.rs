use std::path::{Path, PathBuf};

use super::duplicates_group::DuplicatesGroup;

/// Paths queued for removal across the whole scan.
///
/// Only ever grows while the tree is walked and only discard candidates are
/// pushed, never the kept copy of a group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeletionList {
    paths: Vec<PathBuf>,
}

impl DeletionList {
    pub fn collect(&mut self, group: &DuplicatesGroup) {
        self.paths
            .extend(group.discard.iter().map(|file| file.path.clone()));
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}
