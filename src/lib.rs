//! Estructura - writes an indented outline of a directory tree to a text file

pub mod error;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{EstructuraError, Result};
pub use output::{ReportConfig, TextFormatter};
pub use report::generate_report;
pub use tree::{IgnoreSet, IndentStyle, StructureOutput, TreeWalker, WalkSummary, WalkerConfig};
