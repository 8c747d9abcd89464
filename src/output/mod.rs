//! Output formatting for directory outlines

mod config;
mod text;

pub use config::{DEFAULT_OUTPUT, DEFAULT_ROOT, DEFAULT_TITLE, RULE_WIDTH, ReportConfig};
pub use text::TextFormatter;
