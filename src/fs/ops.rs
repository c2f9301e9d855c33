// src/fs/ops.rs
//! File and folder mutations: create, rename, delete.
//!
//! Every operation is a standalone synchronous call keyed off explicit
//! paths; the shell re-reads the full listing afterwards.

use std::{fs, io, path::Path};

use tracing::info;

use crate::error::BrowserError;

/// Create an empty file named `name` inside `dir`.
pub fn create_file(dir: &Path, name: &str) -> Result<(), BrowserError> {
    let target = dir.join(name);

    match fs::OpenOptions::new().write(true).create_new(true).open(&target) {
        Ok(_) => {
            info!(path = %target.display(), "created file");
            Ok(())
        }
        Err(source) if source.kind() == io::ErrorKind::AlreadyExists => {
            Err(BrowserError::AlreadyExists { path: target })
        }
        Err(source) => Err(BrowserError::Create { path: target, source }),
    }
}

/// Create a folder named `name` inside `dir`, including any missing
/// intermediate segments of the joined path.
pub fn create_folder(dir: &Path, name: &str) -> Result<(), BrowserError> {
    let target = dir.join(name);

    if target.exists() {
        return Err(BrowserError::AlreadyExists { path: target });
    }

    match fs::create_dir_all(&target) {
        Ok(()) => {
            info!(path = %target.display(), "created folder");
            Ok(())
        }
        Err(source) => Err(BrowserError::Create { path: target, source }),
    }
}

/// Rename `old` to `new` within `dir`.
///
/// Whether renaming onto an existing destination overwrites it is left to
/// the platform's rename semantics.
pub fn rename(dir: &Path, old: &str, new: &str) -> Result<(), BrowserError> {
    let from = dir.join(old);
    let to = dir.join(new);

    if let Err(source) = fs::rename(&from, &to) {
        return Err(BrowserError::Rename { from, to, source });
    }

    info!(from = %from.display(), to = %to.display(), "renamed");
    Ok(())
}

/// Delete `dir/name`.
///
/// Directories go through the non-recursive primitive, so deleting a
/// non-empty directory fails and leaves its contents untouched.
pub fn delete(dir: &Path, name: &str) -> Result<(), BrowserError> {
    let target = dir.join(name);

    let result = if target.is_dir() {
        fs::remove_dir(&target)
    } else {
        fs::remove_file(&target)
    };

    match result {
        Ok(()) => {
            info!(path = %target.display(), "deleted");
            Ok(())
        }
        Err(source) => Err(BrowserError::Delete { path: target, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::browser::read_directory;
    use std::fs::File;
    use tempfile::TempDir;

    fn labels(dir: &Path) -> Vec<String> {
        let mut labels: Vec<String> = read_directory(dir)
            .unwrap()
            .iter()
            .map(|e| e.label())
            .collect();
        labels.sort();
        labels
    }

    #[test]
    fn create_file_is_empty_and_appears_in_listing() {
        let tmp = TempDir::new().unwrap();

        create_file(tmp.path(), "a.txt").unwrap();

        let target = tmp.path().join("a.txt");
        assert_eq!(fs::metadata(&target).unwrap().len(), 0);
        assert_eq!(fs::read_to_string(&target).unwrap(), "");
        assert_eq!(labels(tmp.path()), vec!["[File] a.txt".to_string()]);
    }

    #[test]
    fn create_file_rejects_taken_names() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("a.txt")).unwrap();
        fs::create_dir(tmp.path().join("docs")).unwrap();

        let err = create_file(tmp.path(), "a.txt").unwrap_err();
        assert!(matches!(err, BrowserError::AlreadyExists { .. }));

        // A folder occupying the name counts as taken too.
        let err = create_file(tmp.path(), "docs").unwrap_err();
        assert!(matches!(err, BrowserError::AlreadyExists { .. }));
    }

    #[test]
    fn create_folder_appears_as_directory() {
        let tmp = TempDir::new().unwrap();

        create_folder(tmp.path(), "music").unwrap();

        assert!(tmp.path().join("music").is_dir());
        assert_eq!(labels(tmp.path()), vec!["music".to_string()]);
    }

    #[test]
    fn create_folder_builds_missing_segments() {
        let tmp = TempDir::new().unwrap();

        create_folder(tmp.path(), "a/b/c").unwrap();

        assert!(tmp.path().join("a").join("b").join("c").is_dir());
    }

    #[test]
    fn create_folder_rejects_taken_names_without_mutating() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("x")).unwrap();

        let err = create_folder(tmp.path(), "x").unwrap_err();
        assert!(matches!(err, BrowserError::AlreadyExists { .. }));
        // The occupying file is untouched.
        assert!(tmp.path().join("x").is_file());
    }

    #[test]
    fn rename_moves_the_entry() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("a.txt")).unwrap();

        rename(tmp.path(), "a.txt", "b.txt").unwrap();

        assert_eq!(labels(tmp.path()), vec!["[File] b.txt".to_string()]);
    }

    #[test]
    fn rename_missing_source_fails() {
        let tmp = TempDir::new().unwrap();

        let err = rename(tmp.path(), "ghost.txt", "real.txt").unwrap_err();
        assert!(matches!(err, BrowserError::Rename { .. }));
    }

    #[test]
    fn delete_removes_files_and_empty_folders() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("b.txt")).unwrap();
        fs::create_dir(tmp.path().join("empty")).unwrap();

        delete(tmp.path(), "b.txt").unwrap();
        delete(tmp.path(), "empty").unwrap();

        assert!(labels(tmp.path()).is_empty());
    }

    #[test]
    fn delete_refuses_non_empty_folders() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("full")).unwrap();
        File::create(tmp.path().join("full").join("keep.txt")).unwrap();

        let err = delete(tmp.path(), "full").unwrap_err();
        assert!(matches!(err, BrowserError::Delete { .. }));
        // Contents survive the refused delete.
        assert!(tmp.path().join("full").join("keep.txt").is_file());
    }

    #[test]
    fn delete_missing_entry_fails() {
        let tmp = TempDir::new().unwrap();

        let err = delete(tmp.path(), "ghost").unwrap_err();
        assert!(matches!(err, BrowserError::Delete { .. }));
    }
}
