//! Directory tree walking logic
//!
//! `TreeWalker` visits a directory depth-first, parents before children,
//! entries sorted by name, and streams each entry that survives the
//! `IgnoreSet` to a `StructureOutput` sink.

mod config;
mod filter;
mod utils;
mod walker;

pub use config::{DEFAULT_IGNORE, IndentStyle, WalkerConfig};
pub use filter::IgnoreSet;
pub use walker::{StructureOutput, TreeWalker, WalkSummary};
