// src/error.rs
//! Unified error type for browser operations.
//!
//! The shell only ever surfaces a coarse success/failure notification, but
//! every failure keeps its kind and the paths involved here so logs and
//! tests can tell them apart.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Unified error type for all file browser operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Directory could not be enumerated (missing, permission denied, ...).
    #[error("cannot read directory {path:?}: {source}")]
    UnreadableDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Target name is already taken by a file or folder.
    #[error("{path:?} already exists")]
    AlreadyExists { path: PathBuf },

    /// File or folder creation failed.
    #[error("cannot create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rename failed (missing source, occupied destination, cross-device).
    #[error("cannot rename {from:?} to {to:?}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Deletion failed (e.g. a non-empty directory).
    #[error("cannot delete {path:?}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML config parsing error.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
