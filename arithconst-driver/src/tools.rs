// SPDX-License-Identifier: Apache-2.0

//! Helpers for running `gofmt` over the generated source.

use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug)]
pub enum GofmtError {
    /// `gofmt` exited non-zero, i.e. the generated text is not valid Go.
    Rejected {
        status: Option<i32>,
        stderr: String,
    },
    Io(std::io::Error),
}

impl std::fmt::Display for GofmtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GofmtError::Rejected { status, stderr } => {
                write!(f, "gofmt failed with status {:?}: {}", status, stderr.trim())
            }
            GofmtError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GofmtError {}

impl From<std::io::Error> for GofmtError {
    fn from(e: std::io::Error) -> Self {
        GofmtError::Io(e)
    }
}

/// Resolves the `gofmt` binary: an explicitly configured path is used as-is,
/// otherwise `PATH` is searched.
pub fn find_gofmt(configured: Option<&str>) -> Option<PathBuf> {
    match configured {
        Some(path) => Some(PathBuf::from(path)),
        None => which::which("gofmt").ok(),
    }
}

/// Runs `gofmt` over `source` and returns the formatted text.
pub fn run_gofmt(source: &str, gofmt_path: &Path) -> Result<String, GofmtError> {
    log::info!("run_gofmt; gofmt: {}", gofmt_path.display());
    let temp_dir = tempfile::tempdir()?;
    let source_path = temp_dir.path().join("arithConst.go");
    std::fs::write(&source_path, source)?;

    let mut command = Command::new(gofmt_path);
    command.arg(&source_path);
    log::info!("Running command: {:?}", command);

    let output = command.output()?;
    if !output.status.success() {
        return Err(GofmtError::Rejected {
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_gofmt_prefers_configured_path() {
        assert_eq!(
            find_gofmt(Some("/nonexistent/gofmt")),
            Some(PathBuf::from("/nonexistent/gofmt"))
        );
    }

    #[test]
    fn test_run_gofmt_missing_binary_is_io_error() {
        let err = run_gofmt("package main\n", Path::new("/nonexistent/gofmt")).unwrap_err();
        assert!(matches!(err, GofmtError::Io(_)), "{}", err);
    }

    #[test]
    fn test_run_gofmt_rejects_invalid_source() {
        let gofmt = match find_gofmt(None) {
            Some(gofmt) => gofmt,
            None => return,
        };
        let err = run_gofmt("package main\nfunc {\n", &gofmt).unwrap_err();
        assert!(matches!(err, GofmtError::Rejected { .. }), "{}", err);
    }

    #[test]
    fn test_generated_source_is_gofmt_stable() {
        let gofmt = match find_gofmt(None) {
            Some(gofmt) => gofmt,
            None => return,
        };
        let source = arithconst::generate_go_source("arithconst-driver").unwrap();
        let formatted = run_gofmt(&source, &gofmt).unwrap();
        pretty_assertions::assert_eq!(formatted, source);
    }
}
