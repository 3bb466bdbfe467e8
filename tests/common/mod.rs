//! Common test utilities for apigw-trigger CLI tests.
//!
//! `TestEnv` runs the binary from an isolated project directory with its own
//! HOME and config dir, and with the stack's environment variables cleared so
//! the host environment cannot leak into results.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Variables the config loader reads from the process environment
pub const STACK_ENV_VARS: &[&str] = &[
    "ENV",
    "AWS_REGION",
    "STATE_BUCKET",
    "LOCK_TABLE",
    "ENABLE_CACHING",
    "APIGW_TRIGGER_ALGORITHM",
    "APIGW_TRIGGER_SOURCE",
    "RUST_LOG",
];

/// Trigger of the built-in phone numbers API (SHA-1, handles)
pub const BUILTIN_SHA1: &str = "1bb22dad7b92f7f13b64f87907ba487f8632325c";

/// Trigger of the empty identifier list (SHA-1)
pub const EMPTY_SHA1: &str = "97d170e1550eee4afc0af065b78cda302a97674c";

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Last stdout line parsed as JSON
    pub fn json(&self) -> serde_json::Value {
        let line = self.stdout.lines().last().unwrap_or("");
        serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }

    pub fn trimmed_stdout(&self) -> &str {
        self.stdout.trim()
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Write a file relative to the project root
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_root.path().join(relative);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, None)
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> TestResult {
        let mut cmd = self.command(self.project_root.path());
        cmd.args(args);
        cmd.stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("failed to spawn apigw-trigger");
        if let Some(input) = stdin {
            let mut pipe = child.stdin.take().unwrap();
            pipe.write_all(input.as_bytes()).unwrap();
        }
        let output = child.wait_with_output().unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_apigw-trigger"));
        cmd.current_dir(cwd);
        for key in STACK_ENV_VARS {
            cmd.env_remove(key);
        }
        cmd.env("HOME", self.home_dir.path());
        cmd.env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
