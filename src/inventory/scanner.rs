use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SpaceError};

use super::entry::{FileEntry, Inventory};

/// Scan the immediate children of `dir` into an [`Inventory`].
///
/// Entries whose name is in `skip` are recorded but marked skipped and
/// excluded from the total. There is no recursion: a subdirectory is one
/// entry, sized at whatever its metadata reports.
pub fn scan(dir: &Path, skip: &BTreeSet<String>) -> Result<Inventory> {
    scan_with_observer(dir, skip, |_| {})
}

/// Like [`scan`], but hands each entry to `observer` as it is produced, so
/// callers can display progress while the inventory accumulates.
///
/// Every call starts a fresh scan; nothing is shared between calls.
pub fn scan_with_observer(
    dir: &Path,
    skip: &BTreeSet<String>,
    mut observer: impl FnMut(&FileEntry),
) -> Result<Inventory> {
    if !dir.is_dir() {
        return Err(SpaceError::InvalidDirectory(dir.to_path_buf()));
    }

    // Resolve once and carry the path with the inventory; the process-wide
    // working directory is never touched.
    let root = dir.canonicalize().map_err(|e| SpaceError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let read_dir = fs::read_dir(&root).map_err(|e| SpaceError::Io {
        path: root.clone(),
        source: e,
    })?;

    let mut inventory = Inventory::new(root);

    for item in read_dir {
        let item = match item {
            Ok(i) => i,
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable directory entry, skipping");
                continue;
            }
        };

        let name = item.file_name().to_string_lossy().into_owned();

        // An unstattable entry must not be deleted blind; treat it as skipped.
        let (size_bytes, skipped) = match item.metadata() {
            Ok(m) => (m.len(), skip.contains(&name)),
            Err(e) => {
                tracing::warn!(entry = %name, error = %e, "Failed to stat entry");
                (0, true)
            }
        };

        let entry = FileEntry {
            name,
            size_bytes,
            skipped,
        };
        observer(&entry);
        inventory.push(entry);
    }

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn skip_set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn write_file(dir: &Path, name: &str, len: usize) {
        File::create(dir.join(name))
            .unwrap()
            .write_all(&vec![b'x'; len])
            .unwrap();
    }

    #[test]
    fn scan_totals_exclude_skipped_names() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "a", 1_000_000);
        write_file(tmp.path(), "b", 2_000_000);

        let inv = scan(tmp.path(), &skip_set(&["b"])).unwrap();

        assert_eq!(inv.total_bytes(), 1_000_000);
        let a = inv.entries().iter().find(|e| e.name == "a").unwrap();
        let b = inv.entries().iter().find(|e| e.name == "b").unwrap();
        assert!(!a.skipped);
        assert!(b.skipped);
        assert_eq!(b.size_bytes, 2_000_000);
    }

    #[test]
    fn scan_empty_skip_set_counts_everything() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "one", 10);
        write_file(tmp.path(), "two", 20);

        let inv = scan(tmp.path(), &BTreeSet::new()).unwrap();

        assert_eq!(inv.total_bytes(), 30);
        assert_eq!(inv.included().count(), 2);
    }

    #[test]
    fn scan_does_not_recurse_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        write_file(&tmp.path().join("sub"), "inner", 5000);
        write_file(tmp.path(), "outer", 100);

        let inv = scan(tmp.path(), &BTreeSet::new()).unwrap();

        // "sub" is one entry; "inner" never appears.
        assert_eq!(inv.entries().len(), 2);
        assert!(inv.entries().iter().any(|e| e.name == "sub"));
        assert!(!inv.entries().iter().any(|e| e.name == "inner"));
    }

    #[test]
    fn scan_missing_directory_fails() {
        let err = scan(Path::new("/nonexistent/path/12345"), &BTreeSet::new()).unwrap_err();
        assert!(matches!(err, SpaceError::InvalidDirectory(_)));
    }

    #[test]
    fn scan_file_path_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "plain", 1);

        let err = scan(&tmp.path().join("plain"), &BTreeSet::new()).unwrap_err();
        assert!(matches!(err, SpaceError::InvalidDirectory(_)));
    }

    #[test]
    fn observer_sees_every_entry_once() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "a", 1);
        write_file(tmp.path(), "b", 2);

        let mut seen = Vec::new();
        let inv = scan_with_observer(tmp.path(), &skip_set(&["b"]), |e| {
            seen.push((e.name.clone(), e.skipped));
        })
        .unwrap();

        seen.sort();
        assert_eq!(
            seen,
            vec![("a".to_string(), false), ("b".to_string(), true)]
        );
        assert_eq!(inv.entries().len(), 2);
    }

    #[test]
    fn rescan_starts_fresh() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "a", 100);

        let first = scan(tmp.path(), &BTreeSet::new()).unwrap();
        let second = scan(tmp.path(), &BTreeSet::new()).unwrap();

        // Nothing accumulates across calls.
        assert_eq!(first.total_bytes(), second.total_bytes());
        assert_eq!(first.entries().len(), second.entries().len());
    }
}
