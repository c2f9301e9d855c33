// src/viewer.rs
//! External viewer launch.
//!
//! The browser never renders file contents itself; it hands the path to
//! whatever viewer the host associates with the file. Fire-and-forget:
//! the browser receives no result, a failed launch is only logged.

use std::path::Path;

use tracing::{info, warn};

/// Ask the host to open `path` in its associated viewer.
pub fn open_in_viewer(path: &Path, mime: &str) {
    info!(path = %path.display(), mime, "opening in external viewer");

    if let Err(e) = open::that(path) {
        warn!(path = %path.display(), error = %e, "viewer launch failed");
    }
}
