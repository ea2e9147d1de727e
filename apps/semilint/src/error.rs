//! Error type for recoverable, per-file failures.
//!
//! None of these abort a run: they are collected next to the lint result
//! and rendered as warnings.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SemilintError {
    #[error("Skipping unreadable file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Skipping {path}: not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    #[error("Skipping missing file {path}")]
    MissingFile { path: PathBuf },

    #[error("Cannot create {path}: {source}")]
    TempCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    TempWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to replace {path}: {source}")]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Git error: {message}")]
    Git { message: String },

    #[error("Ignoring invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl SemilintError {
    /// File the error concerns, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileRead { path, .. }
            | Self::InvalidUtf8 { path }
            | Self::MissingFile { path }
            | Self::TempCreate { path, .. }
            | Self::TempWrite { path, .. }
            | Self::Replace { path, .. }
            | Self::Config { path, .. } => Some(path),
            Self::Git { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SemilintError>;
