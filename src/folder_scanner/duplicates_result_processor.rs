use std::{fs, path::PathBuf};

use log::{info, warn};

use super::collector::DeletionList;
use crate::error::DedupError;

#[derive(Debug, Default)]
pub struct DeletionTally {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<DedupError>,
}

impl DeletionTally {
    pub fn success_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }
}

/// Removes every listed path once. A failed removal is recorded and the
/// remaining paths are still processed.
pub fn delete_all(list: &DeletionList) -> DeletionTally {
    let mut tally = DeletionTally::default();

    for path in list.iter() {
        match fs::remove_file(path) {
            Ok(()) => {
                info!("[deleted] {}", path.display());
                tally.deleted.push(path.to_path_buf());
            }
            Err(source) => {
                let error = DedupError::Deletion {
                    path: path.to_path_buf(),
                    source,
                };
                warn!("{}", error);
                tally.failed.push(error);
            }
        }
    }

    tally
}
