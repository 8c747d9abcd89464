//! Configuration types for tree walkers

/// Names skipped at every level unless the caller opts out.
pub const DEFAULT_IGNORE: &[&str] = &[
    "env",
    "node_modules",
    ".git",
    "__pycache__",
    ".venv",
    "data",
    "build",
    ".kotlin",
    ".gradle",
];

/// Strings used to draw one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStyle {
    /// Repeated once per level of depth.
    pub indent: String,
    /// Written right before the entry name.
    pub branch: String,
}

impl IndentStyle {
    pub fn new(indent: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            branch: branch.into(),
        }
    }

    /// Render a single line (without the trailing newline).
    pub fn render(&self, depth: usize, name: &str) -> String {
        let mut line =
            String::with_capacity(self.indent.len() * depth + self.branch.len() + name.len());
        for _ in 0..depth {
            line.push_str(&self.indent);
        }
        line.push_str(&self.branch);
        line.push_str(name);
        line
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self::new("│   ", "├── ")
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Exact entry names to skip.
    pub ignore_names: Vec<String>,
    /// Glob patterns matched against entry names.
    pub ignore_patterns: Vec<String>,
    pub indent: IndentStyle,
    /// Descend only this many levels; directories at the limit are still listed.
    pub max_depth: Option<usize>,
    /// Refuse to re-enter a directory that is already being walked.
    /// Off by default: symlinked directories are followed blindly.
    pub guard_cycles: bool,
}

impl WalkerConfig {
    /// A config that skips nothing.
    pub fn empty() -> Self {
        Self {
            ignore_names: Vec::new(),
            ..Default::default()
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore_names: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            ignore_patterns: Vec::new(),
            indent: IndentStyle::default(),
            max_depth: None,
            guard_cycles: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_style() {
        let style = IndentStyle::default();
        assert_eq!(style.render(0, "x"), "├── x");
        assert_eq!(style.render(1, "y.txt"), "│   ├── y.txt");
        assert_eq!(style.render(3, "z"), "│   │   │   ├── z");
    }

    #[test]
    fn test_render_custom_style() {
        let style = IndentStyle::new("  ", "- ");
        assert_eq!(style.render(2, "deep"), "    - deep");
    }

    #[test]
    fn test_default_ignores() {
        let config = WalkerConfig::default();
        for name in [".git", "node_modules", "__pycache__", ".gradle"] {
            assert!(config.ignore_names.iter().any(|n| n == name), "{name}");
        }
        assert!(WalkerConfig::empty().ignore_names.is_empty());
    }
}
