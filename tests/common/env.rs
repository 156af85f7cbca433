//! Test environment builder for isolated Ferrypay testing.
//!
//! Provides `TestEnv` - an isolated ledger in a temp directory plus
//! helpers to run the CLI as either built-in user.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Ferrypay CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse each stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("stdout line is not JSON"))
            .collect()
    }
}

/// Isolated test environment with its own ledger file.
pub struct TestEnv {
    pub dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_ferrypay")),
        }
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.path().join("ledger.json")
    }

    /// Run the CLI with explicit credentials against this env's ledger
    pub fn run_as(&self, user: &str, password: &str, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.dir.path())
            .arg("--ledger")
            .arg(self.ledger_path())
            .arg("--user")
            .arg(user)
            .arg("--password")
            .arg(password)
            .args(args);

        let output = cmd.output().expect("Failed to execute ferrypay");
        Self::output_to_result(output)
    }

    /// Run as the built-in employer (Dr. João Naval)
    pub fn employer(&self, args: &[&str]) -> TestResult {
        self.run_as("admin", "admin", args)
    }

    /// Run as the built-in contractor (Mestre Carlos Estaleiro)
    pub fn contractor(&self, args: &[&str]) -> TestResult {
        self.run_as("empreiteiro", "obra2024", args)
    }

    pub fn read_ledger(&self) -> String {
        std::fs::read_to_string(self.ledger_path()).expect("Failed to read ledger file")
    }

    pub fn write_ledger(&self, content: &str) {
        std::fs::write(self.ledger_path(), content).expect("Failed to write ledger file");
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
