use grouping_by::GroupingBy;
use log::{debug, info, warn};

use super::{duplicates_group::DuplicatesGroup, file_info::FileInfo, hasher::ContentHasher};
use crate::error::DedupError;

/// Duplicates found among the files of a single directory.
#[derive(Debug, Default)]
pub struct DirectoryDuplicates {
    pub groups: Vec<DuplicatesGroup>,
    pub errors: Vec<DedupError>,
}

/// Partitions one directory's files by size, then by digest, and resolves
/// every bucket of two or more identical files into a group.
///
/// Files with a unique size are never hashed. A file that cannot be hashed is
/// reported and left out of its bucket. Groups come out ordered by size, then
/// by digest.
pub fn deduplicate<H>(files: Vec<FileInfo>, hasher: &H) -> DirectoryDuplicates
where
    H: ContentHasher + ?Sized,
{
    let mut result = DirectoryDuplicates::default();

    let mut size_buckets = files
        .into_iter()
        .grouping_by(|file| file.size)
        .into_iter()
        .filter(|(_, bucket)| bucket.len() > 1)
        .collect::<Vec<_>>();
    size_buckets.sort_by_key(|(size, _)| *size);

    for (size, bucket) in size_buckets {
        debug!("Hashing {} files of {} bytes", bucket.len(), size);

        let mut hashed = Vec::with_capacity(bucket.len());
        for file in bucket {
            match hasher.hash(&file.path) {
                Ok(hash) => hashed.push((hash, file)),
                Err(error) => {
                    warn!("{}", error);
                    result.errors.push(error);
                }
            }
        }

        let mut hash_buckets = hashed
            .into_iter()
            .grouping_by(|entry| entry.0.clone())
            .into_iter()
            .filter(|(_, bucket)| bucket.len() > 1)
            .collect::<Vec<_>>();
        hash_buckets.sort_by(|a, b| a.0.cmp(&b.0));

        for (hash, bucket) in hash_buckets {
            let files = bucket.into_iter().map(|(_, file)| file).collect();
            if let Some(group) = DuplicatesGroup::select(hash, files) {
                info!(
                    "Found duplicates (hash {}...): keeping [{}]",
                    group.hash_prefix(),
                    group.keep.name.to_string_lossy()
                );
                result.groups.push(group);
            }
        }
    }

    result
}
