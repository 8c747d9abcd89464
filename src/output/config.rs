//! Output configuration types

use std::path::PathBuf;

use crate::tree::WalkerConfig;

pub const DEFAULT_ROOT: &str = "../EntrevistaAPPBack";
pub const DEFAULT_OUTPUT: &str = "estructura_front.txt";
pub const DEFAULT_TITLE: &str = "Estructura Front-OM-React";

/// Width of the `=` rule under the title.
pub const RULE_WIDTH: usize = 32;

/// Everything one report run needs.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory to describe.
    pub root: PathBuf,
    /// File the outline is written to; truncated on every run.
    pub output: PathBuf,
    pub title: String,
    pub walker: WalkerConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            walker: WalkerConfig::default(),
        }
    }
}
