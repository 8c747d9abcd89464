//! TreeWalker - depth-first pre-order walk that streams lines to a sink

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EstructuraError, Result};

use super::config::WalkerConfig;
use super::filter::IgnoreSet;
use super::utils::{entry_name, read_sorted_entries};

/// Counts of emitted lines, split by entry kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
}

impl WalkSummary {
    pub fn total(&self) -> usize {
        self.dirs + self.files
    }
}

/// Callback for streaming output - receives one call per emitted entry,
/// in pre-order.
pub trait StructureOutput {
    fn output_node(&mut self, name: &str, depth: usize, is_dir: bool) -> io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}

/// Walks a directory without building the tree in memory.
/// Uses O(depth) memory beyond the listing of the directory being visited.
pub struct TreeWalker {
    config: WalkerConfig,
    ignore: IgnoreSet,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let ignore = IgnoreSet::from_config(&config);
        Self { config, ignore }
    }

    /// Walk `root` and stream every non-ignored entry below it to `output`.
    ///
    /// The root itself is not emitted. Fails on the first I/O error.
    pub fn walk<O: StructureOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut ancestors = Vec::new();
        if self.config.guard_cycles {
            ancestors.push(canonical(root)?);
        }

        self.walk_dir(root, 0, output, &mut summary, &mut ancestors)?;
        output.finish(&summary)?;

        log::info!(
            "walked {}: {} directories, {} files",
            root.display(),
            summary.dirs,
            summary.files
        );
        Ok(summary)
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    fn walk_dir<O: StructureOutput>(
        &self,
        path: &Path,
        depth: usize,
        output: &mut O,
        summary: &mut WalkSummary,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<()> {
        if self.at_max_depth(depth) {
            return Ok(());
        }
        log::debug!("listing {} at depth {}", path.display(), depth);

        for entry in read_sorted_entries(path)? {
            let name = entry_name(&entry)?;
            if self.ignore.is_ignored(&name) {
                log::trace!("skipping ignored entry {}", name);
                continue;
            }

            let entry_path = entry.path();
            // Follows symlinks, so a link to a directory is walked like one
            let is_dir = entry_path.is_dir();
            output.output_node(&name, depth, is_dir)?;

            if !is_dir {
                summary.files += 1;
                continue;
            }
            summary.dirs += 1;

            if !self.config.guard_cycles {
                self.walk_dir(&entry_path, depth + 1, output, summary, ancestors)?;
                continue;
            }

            let resolved = canonical(&entry_path)?;
            if ancestors.contains(&resolved) {
                log::warn!(
                    "not descending into {}: it loops back to {}",
                    entry_path.display(),
                    resolved.display()
                );
                continue;
            }
            ancestors.push(resolved);
            let walked = self.walk_dir(&entry_path, depth + 1, output, summary, ancestors);
            ancestors.pop();
            walked?;
        }

        Ok(())
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|source| EstructuraError::ReadDir {
        path: path.to_path_buf(),
        source,
    })
}
