//! Test harness for sizetree integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use sizetree::test_utils::TestDir;

pub const MIB: usize = 1024 * 1024;

/// Run the binary in `dir`; returns (stdout, stderr, exit code).
pub fn run_sizetree(dir: &Path, args: &[&str]) -> (String, String, Option<i32>) {
    let binary = env!("CARGO_BIN_EXE_sizetree");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sizetree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

/// Lines of the report, without the blank separator lines.
pub fn report_lines(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|l| !l.is_empty()).collect()
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
    fn test_harness_sized_file() {
        let dir = TestDir::new();
        let file = dir.add_sized_file("a/b.bin", 1234);
        assert_eq!(std::fs::metadata(file).unwrap().len(), 1234);
    }
}
