//! Test harness for estructura integration tests

use std::path::Path;
use std::process::Command;

pub use estructura::test_utils::TestDir;

/// Run the binary inside `dir`, returning (stdout, stderr, success).
pub fn run_estructura(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_estructura");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run estructura");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Read the report written into `dir`, panicking if it is missing.
pub fn read_report(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).expect("report should exist")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
