use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::{
    collector::DeletionList, deduplicator::deduplicate, file_info::FileInfo,
    hasher::ContentHasher,
};
use crate::error::DedupError;

#[derive(Debug, Default)]
pub struct ScanReport {
    pub deletion_list: DeletionList,
    pub groups: usize,
    pub directories: usize,
    pub errors: Vec<DedupError>,
}

/// Immediate children of one directory.
#[derive(Debug, Default)]
struct Listing {
    files: Vec<FileInfo>,
    subdirs: Vec<PathBuf>,
}

fn validate_root(root: &Path) -> Result<(), DedupError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        _ => Err(DedupError::InvalidRoot(root.to_path_buf())),
    }
}

/// Walks a tree depth-first, finding duplicates inside each directory on its
/// own. Files in different directories are never compared.
pub struct Scanner<H> {
    hasher: H,
}

impl<H: ContentHasher> Scanner<H> {
    pub fn new(hasher: H) -> Self {
        Scanner { hasher }
    }

    pub fn scan(&self, root: &Path) -> Result<ScanReport, DedupError> {
        validate_root(root)?;
        info!("Starting scanning folder: {}", root.display());

        let mut report = ScanReport::default();
        self.visit_dir(root, &mut report);

        info!(
            "Scanning finished: {} directories, {} duplicate groups, {} errors",
            report.directories,
            report.groups,
            report.errors.len()
        );
        Ok(report)
    }

    fn visit_dir(&self, dir: &Path, report: &mut ScanReport) {
        let listing = match list_dir(dir) {
            Ok(listing) => listing,
            Err(error) => {
                warn!("{}", error);
                report.errors.push(error);
                return;
            }
        };
        info!("Scanning directory {}", dir.display());
        report.directories += 1;

        let found = deduplicate(listing.files, &self.hasher);
        for group in &found.groups {
            report.deletion_list.collect(group);
        }
        report.groups += found.groups.len();
        report.errors.extend(found.errors);

        for subdir in listing.subdirs {
            self.visit_dir(&subdir, report);
        }
    }
}

/// Lists a directory in file name order. Only regular files and real
/// directories are kept; symlinks and special files are skipped.
fn list_dir(dir: &Path) -> Result<Listing, DedupError> {
    let read_dir = fs::read_dir(dir).map_err(|source| DedupError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(error) => warn!("Skipping unreadable entry in {}: {}", dir.display(), error),
        }
    }
    entries.sort_by_key(|entry| entry.file_name());

    let mut listing = Listing::default();
    for entry in entries {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(error) => {
                warn!("Cannot determine type of {}: {}", path.display(), error);
                continue;
            }
        };

        if file_type.is_dir() {
            listing.subdirs.push(path);
        } else if file_type.is_file() {
            match entry.metadata() {
                Ok(metadata) => {
                    listing
                        .files
                        .push(FileInfo::new(entry.file_name(), path, metadata.len()))
                }
                Err(error) => warn!("Cannot read size of {}: {}", path.display(), error),
            }
        } else {
            debug!("Skipping non-regular entry {}", path.display());
        }
    }

    Ok(listing)
}
