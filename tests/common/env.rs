//! Test environment for isolated menutree runs.
//!
//! Every run gets its own working directory and config home so a developer's
//! `menutree.toml` or `MENUTREE_*` variables never leak into assertions.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Result of running the menutree binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Last non-empty stdout line (the result line on success)
    pub fn last_line(&self) -> &str {
        self.stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("")
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the binary
    pub work_dir: TempDir,
    /// Stand-in for HOME / XDG_CONFIG_HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("failed to create work dir"),
            home_dir: TempDir::new().expect("failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_menutree")),
        }
    }

    /// Write a file relative to the working directory
    pub fn write_work_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Run the binary with `args`, feeding `stdin` as the user's answers.
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    pub fn run_with_env(&self, args: &[&str], stdin: &str, envs: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .current_dir(self.work_dir.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path())
            .env_remove("MENUTREE_CLEAR")
            .env_remove("MENUTREE_ON_INVALID")
            .env_remove("MENUTREE_MAX_ATTEMPTS")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to spawn menutree");
        {
            let mut child_stdin = child.stdin.take().expect("stdin is piped");
            // The binary may exit before reading everything.
            let _ = child_stdin.write_all(stdin.as_bytes());
        }
        let output = child.wait_with_output().expect("failed to wait for menutree");

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
