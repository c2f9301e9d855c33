// src/fs/browser.rs
//! Directory listing and navigation.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::error::BrowserError;

/// A single child of the browsed directory. Name plus the directory/file
/// classification is everything the browser models about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    /// Display label: directories show their bare name, files carry a
    /// "[File]" marker so the two stay distinguishable as plain text.
    pub fn label(&self) -> String {
        if self.is_dir {
            self.name.clone()
        } else {
            format!("[File] {}", self.name)
        }
    }
}

/// Read the immediate children of `dir`.
///
/// Entries come back in whatever order the filesystem hands them out; no
/// sorting is applied. Children that vanish mid-enumeration are skipped.
pub fn read_directory(dir: &Path) -> Result<Vec<Entry>, BrowserError> {
    let iter = fs::read_dir(dir).map_err(|source| BrowserError::UnreadableDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let entries = iter
        .filter_map(Result::ok)
        .map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            let is_dir = e.path().is_dir();
            Entry { name, is_dir }
        })
        .collect();

    Ok(entries)
}

/// Forgiving listing used by the shell: an unreadable directory logs a
/// warning and lists as empty instead of propagating the error.
pub fn load_entries(dir: &Path) -> Vec<Entry> {
    match read_directory(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "listing failed");
            Vec::new()
        }
    }
}

/// Resolve `name` against `current` as the new browsing location.
///
/// No existence check happens here: the caller already classified the
/// entry from a prior listing, and a stale target simply lists as empty
/// on the next refresh.
pub fn navigate(current: &Path, name: &str) -> PathBuf {
    current.join(name)
}

/// Last `n` components of `path`, for compact pane titles.
pub fn tail_path(path: &Path, n: usize) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.len() <= n {
        path.display().to_string()
    } else {
        format!("…/{}", parts[parts.len() - n..].join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn lists_and_labels_immediate_children() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("notes.txt")).unwrap();
        fs::create_dir(tmp.path().join("photos")).unwrap();
        File::create(tmp.path().join("photos").join("cat.png")).unwrap();

        let mut labels: Vec<String> = read_directory(tmp.path())
            .unwrap()
            .iter()
            .map(Entry::label)
            .collect();
        // Enumeration order is platform-dependent, so compare sorted.
        labels.sort();

        assert_eq!(labels, vec!["[File] notes.txt".to_string(), "photos".to_string()]);
    }

    #[test]
    fn unreadable_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");

        let err = read_directory(&missing).unwrap_err();
        assert!(matches!(err, BrowserError::UnreadableDirectory { .. }));
    }

    #[test]
    fn load_entries_swallows_the_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_entries(&tmp.path().join("gone")).is_empty());
    }

    #[test]
    fn navigate_joins_without_checking_existence() {
        let tmp = TempDir::new().unwrap();

        let joined = navigate(tmp.path(), "missing");
        assert_eq!(joined, tmp.path().join("missing"));
        // The stale reference lists as empty instead of failing.
        assert!(load_entries(&joined).is_empty());
    }

    #[test]
    fn navigated_listing_is_independent_of_parent() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("a.txt")).unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        File::create(tmp.path().join("sub").join("b.txt")).unwrap();

        let sub = navigate(tmp.path(), "sub");
        let labels: Vec<String> = read_directory(&sub)
            .unwrap()
            .iter()
            .map(Entry::label)
            .collect();

        assert_eq!(labels, vec!["[File] b.txt".to_string()]);
    }

    #[test]
    fn tail_path_keeps_last_components() {
        assert_eq!(tail_path(Path::new("/srv/media/photos/cats"), 2), "…/photos/cats");
        assert_eq!(tail_path(Path::new("photos/cats"), 3), "photos/cats");
    }
}
