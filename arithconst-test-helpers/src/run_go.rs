// SPDX-License-Identifier: Apache-2.0

//! Helpers for building and running generated Go programs via the `go` tool
//! when it is present via system installation.
//!
//! The program is written into a fresh temporary directory, built with
//! `go build`, and the resulting binary is executed. A non-zero exit of the
//! program itself is not an error: it is reported through [`GoRunOutput`] so
//! tests can assert on mismatch reporting.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::tempdir;

/// Error type returned by [`run_go_program`] when the program cannot be built
/// or started.
#[derive(Debug)]
pub enum GoRunError {
    /// The `go` tool is not available in the caller's `PATH`.
    GoUnavailable,
    /// `go build` returned a non-zero exit code.
    BuildFailed {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// Generic I/O error (e.g. writing the source or spawning a process).
    Io(std::io::Error),
}

impl std::fmt::Display for GoRunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoRunError::GoUnavailable => write!(f, "go tool not found in PATH"),
            GoRunError::BuildFailed { status, stderr, .. } => {
                write!(f, "go build failed with status {:?}: {}", status, stderr)
            }
            GoRunError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GoRunError {}

impl From<std::io::Error> for GoRunError {
    fn from(e: std::io::Error) -> Self {
        GoRunError::Io(e)
    }
}

/// Captured result of running a built program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoRunOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GoRunOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Attempts to locate the `go` binary using the caller's `PATH`.
pub fn find_go() -> Option<PathBuf> {
    if let Ok(output) = Command::new("which").arg("go").output() {
        if output.status.success() {
            let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !path_str.is_empty() {
                return Some(PathBuf::from(path_str));
            }
        }
    }
    None
}

fn build_with_go(go_bin: &Path, work_dir: &Path, source: &Path) -> Result<PathBuf, GoRunError> {
    let out_path = work_dir.join("prog");
    let mut cmd = Command::new(go_bin);
    cmd.current_dir(work_dir)
        .arg("build")
        .arg("-o")
        .arg(&out_path)
        .arg(source);
    if std::env::var_os("GOCACHE").is_none() {
        cmd.env("GOCACHE", work_dir.join("gocache"));
    }

    log::info!("Running: {:?}", cmd);

    let output = cmd.output()?;
    if !output.status.success() {
        return Err(GoRunError::BuildFailed {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into(),
            stderr: String::from_utf8_lossy(&output.stderr).into(),
        });
    }
    log::info!("go build finished OK, output {:?}", out_path);
    Ok(out_path)
}

/// Builds and runs the single-file Go program `source_text`.
///
/// Returns [`GoRunError::GoUnavailable`] if `go` is not installed so callers
/// can skip gracefully.
pub fn run_go_program(source_text: &str) -> Result<GoRunOutput, GoRunError> {
    let go_bin = find_go().ok_or(GoRunError::GoUnavailable)?;
    let temp_dir = tempdir()?;
    let source_path = temp_dir.path().join("main.go");
    std::fs::write(&source_path, source_text)?;
    log::info!("wrote Go source to {}", source_path.display());

    let binary = build_with_go(&go_bin, temp_dir.path(), &source_path)?;

    let mut cmd = Command::new(&binary);
    cmd.current_dir(temp_dir.path());
    log::info!("Running: {:?}", cmd);
    let output = cmd.output()?;
    Ok(GoRunOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into(),
        stderr: String::from_utf8_lossy(&output.stderr).into(),
    })
}
