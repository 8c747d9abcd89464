//! Shared utility functions for tree walking

use std::fs::DirEntry;
use std::path::Path;

use crate::error::{EstructuraError, Result};

/// Get the name of a directory entry. Names that are not valid UTF-8 are
/// rejected rather than written with replacement characters.
pub fn entry_name(entry: &DirEntry) -> Result<String> {
    entry
        .file_name()
        .into_string()
        .map_err(|_| EstructuraError::InvalidName { path: entry.path() })
}

/// Read all entries of a directory, sorted by raw file name.
///
/// Any failure, whether opening the directory or reading one of its
/// entries, aborts the listing.
pub fn read_sorted_entries(path: &Path) -> Result<Vec<DirEntry>> {
    let read_err = |source| EstructuraError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = std::fs::read_dir(path)
        .map_err(read_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort_by_key(|a| a.file_name());
    Ok(entries)
}
