//! Test environment for running the `detective` binary in isolation.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running a `detective` command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON (for `--json` runs)
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?} ({e})\n{}", self.stdout))
            })
            .collect()
    }
}

/// Temp working directory with a plain, uncolored environment.
pub struct TestEnv {
    pub dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_detective")),
        }
    }

    /// Write a file into the temp directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run `detective` with `stdin` piped in
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    pub fn run_with_env(&self, args: &[&str], stdin: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.dir.path())
            .args(args)
            .env_remove("DETECTIVE_MANSION")
            .env_remove("DETECTIVE_COLOR")
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute detective");
        if let Some(mut pipe) = child.stdin.take() {
            // The process may exit before reading (setup errors).
            let _ = pipe.write_all(stdin.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for detective");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
