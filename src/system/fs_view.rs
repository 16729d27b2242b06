// src/system/fs_view.rs

// Read-only filesystem queries behind the `ls` and `cat` builtins. No
// lifecycle here: these feed colored output and nothing else.

use std::io::{self, ErrorKind};
use std::path::Path;
use std::fs;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    /// Symlinks, sockets, devices — anything that is neither of the above.
    Other,
}

#[derive(Debug)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
}

/// Lists the immediate children of `path`, sorted by name.
pub fn list_dir(path: &Path) -> io::Result<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::Regular
        } else {
            EntryKind::Other
        };
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }
    Ok(entries)
}

/// Returns the full contents of a regular, readable file. Anything else
/// (missing path, directory, special file) is an error.
pub fn read_regular_file(path: &Path) -> io::Result<Vec<u8>> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(ErrorKind::InvalidInput, "not a regular file"));
    }
    fs::read(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_dir_reports_names_and_kinds_sorted() {
        // --- Setup ---
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::create_dir(dir.path().join("a-subdir")).unwrap();

        // --- Execute ---
        let entries = list_dir(dir.path()).unwrap();

        // --- Assert ---
        let described: Vec<(&str, EntryKind)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.kind))
            .collect();
        assert_eq!(
            described,
            vec![
                ("a-subdir", EntryKind::Directory),
                ("b.txt", EntryKind::Regular),
            ]
        );
    }

    #[test]
    fn test_list_dir_of_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(list_dir(&dir.path().join("nowhere")).is_err());
    }

    #[test]
    fn test_read_regular_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, b"hello world").unwrap();

        assert_eq!(read_regular_file(&path).unwrap(), b"hello world");
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_regular_file(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn test_read_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_regular_file(dir.path()).is_err());
    }
}
