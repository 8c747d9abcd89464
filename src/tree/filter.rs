//! Entry filtering for tree walking

use std::collections::HashSet;

use glob::Pattern;

use super::config::WalkerConfig;

/// Set of names excluded from the walk.
///
/// Exact names are compared literally; patterns go through `glob`.
/// Patterns that fail to compile are dropped with a warning.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    names: HashSet<String>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            patterns: Vec::new(),
        }
    }

    pub fn from_config(config: &WalkerConfig) -> Self {
        let mut set = Self::new(config.ignore_names.iter().cloned());
        for pattern in &config.ignore_patterns {
            set.add_pattern(pattern);
        }
        set
    }

    pub fn add_pattern(&mut self, pattern: &str) {
        match Pattern::new(pattern) {
            Ok(p) => self.patterns.push(p),
            Err(e) => log::warn!("ignoring invalid pattern '{}': {}", pattern, e),
        }
    }

    /// Check if an entry name should be skipped.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.names.contains(name) || self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.patterns.is_empty()
    }
}
