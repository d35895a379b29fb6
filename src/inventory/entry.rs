use std::path::{Path, PathBuf};

/// One scanned filesystem item, as it looked at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Entry name within the scanned directory (not a full path)
    pub name: String,

    /// Byte size at scan time
    pub size_bytes: u64,

    /// True if the name matched the skip set
    pub skipped: bool,
}

/// Result of one scan pass over a directory.
///
/// Entries are kept in directory-listing order. The aggregate total is
/// maintained by construction: it covers exactly the entries that were not
/// skipped. Fields are private so no caller can break that invariant.
#[derive(Debug, Clone)]
pub struct Inventory {
    root: PathBuf,
    entries: Vec<FileEntry>,
    total_bytes: u64,
}

impl Inventory {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: Vec::new(),
            total_bytes: 0,
        }
    }

    pub(crate) fn push(&mut self, entry: FileEntry) {
        if !entry.skipped {
            self.total_bytes += entry.size_bytes;
        }
        self.entries.push(entry);
    }

    /// The resolved directory the entries were scanned from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All scanned entries, skipped ones included, in listing order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Entries subject to accounting and deletion (skip set excluded).
    pub fn included(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|e| !e.skipped)
    }

    /// Sum of sizes over the non-skipped entries.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size: u64, skipped: bool) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            size_bytes: size,
            skipped,
        }
    }

    #[test]
    fn total_counts_only_included_entries() {
        let mut inv = Inventory::new(PathBuf::from("/tmp"));
        inv.push(entry("a", 100, false));
        inv.push(entry("b", 200, true));
        inv.push(entry("c", 50, false));

        assert_eq!(inv.total_bytes(), 150);
        assert_eq!(inv.entries().len(), 3);
        assert_eq!(inv.included().count(), 2);
    }

    #[test]
    fn listing_order_is_preserved() {
        let mut inv = Inventory::new(PathBuf::from("/tmp"));
        inv.push(entry("z", 1, false));
        inv.push(entry("a", 1, false));

        let names: Vec<_> = inv.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn empty_inventory_has_zero_total() {
        let inv = Inventory::new(PathBuf::from("/tmp"));
        assert!(inv.is_empty());
        assert_eq!(inv.total_bytes(), 0);
    }
}
