use super::file_info::FileInfo;

/// Files of one directory sharing size and digest, resolved into the copy
/// that survives and the copies queued for removal.
#[derive(Clone, Debug)]
pub struct DuplicatesGroup {
    pub hash: String,
    pub keep: FileInfo,
    pub discard: Vec<FileInfo>,
}

impl DuplicatesGroup {
    /// Keeps the shortest file name, ties broken lexicographically. Names are
    /// compared on their raw bytes, so non UTF-8 names order correctly.
    /// Returns `None` for fewer than two files.
    pub fn select(hash: String, mut files: Vec<FileInfo>) -> Option<Self> {
        if files.len() < 2 {
            return None;
        }

        files.sort_by(|a, b| {
            let (a, b) = (a.name_bytes(), b.name_bytes());
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        });

        let discard = files.split_off(1);
        let keep = files.pop()?;
        Some(DuplicatesGroup {
            hash,
            keep,
            discard,
        })
    }

    pub fn hash_prefix(&self) -> &str {
        self.hash.get(..8).unwrap_or(&self.hash)
    }
}
