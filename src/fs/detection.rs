// src/fs/detection.rs
//! Viewer classification by file extension.

use std::path::{Path, PathBuf};

/// MIME type handed to the external viewer for `path`, if the file is a
/// kind the browser opens at all.
///
/// The supported set is deliberately small: plain text and the common
/// bitmap image formats. Everything else returns `None` and is left
/// unopened. Extensions match case-insensitively.
pub fn viewer_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;

    if ext.eq_ignore_ascii_case("txt") {
        Some("text/plain")
    } else if ["bmp", "jpg", "png"].iter().any(|img| ext.eq_ignore_ascii_case(img)) {
        Some("image/*")
    } else {
        None
    }
}

/// Resolve `name` against `dir` and classify it for viewing.
///
/// Returns the joined path plus the MIME type the viewer should be asked
/// to handle, or `None` for file kinds the browser does not open.
pub fn open_target(dir: &Path, name: &str) -> Option<(PathBuf, &'static str)> {
    let path = dir.join(name);
    let mime = viewer_mime(&path)?;
    Some((path, mime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_files_map_to_text_plain() {
        assert_eq!(viewer_mime(Path::new("notes.txt")), Some("text/plain"));
        assert_eq!(viewer_mime(Path::new("NOTES.TXT")), Some("text/plain"));
    }

    #[test]
    fn bitmap_images_map_to_image_star() {
        for name in ["photo.bmp", "photo.jpg", "photo.png", "PHOTO.PNG"] {
            assert_eq!(viewer_mime(Path::new(name)), Some("image/*"), "{name}");
        }
    }

    #[test]
    fn unsupported_extensions_are_not_opened() {
        // .jpeg is not in the supported set, only the literal .jpg.
        assert_eq!(viewer_mime(Path::new("photo.jpeg")), None);
        assert_eq!(viewer_mime(Path::new("song.mp3")), None);
        assert_eq!(viewer_mime(Path::new("archive.tar.gz")), None);
        assert_eq!(viewer_mime(Path::new("README")), None);
    }

    #[test]
    fn open_target_joins_and_classifies() {
        let target = open_target(Path::new("/data"), "notes.txt");
        assert_eq!(target, Some((PathBuf::from("/data/notes.txt"), "text/plain")));

        assert_eq!(open_target(Path::new("/data"), "core.bin"), None);
    }
}
