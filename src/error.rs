//! Error types for report generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstructuraError {
    /// The root directory to describe does not exist.
    #[error("La ruta no existe -> {}", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry name that cannot be written to the UTF-8 outline.
    #[error("file name is not valid UTF-8: '{}'", .path.display())]
    InvalidName { path: PathBuf },

    #[error("cannot create '{}': {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}

impl EstructuraError {
    /// True for the one failure users are expected to hit: a mistyped root.
    pub fn is_missing_root(&self) -> bool {
        matches!(self, Self::RootNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, EstructuraError>;
