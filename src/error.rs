//! Application error types.
//!
//! Defines `AppError` for every failure the analysis core can report. The
//! core never prints; errors propagate unchanged to the CLI boundary, which
//! is the only place that formats them and picks an exit code.
//!
//! Categories:
//! - `PathNotFound`, `NotAFile`, `NotInRepository` → bad input, nothing analyzed
//! - `QueryFailed` → `git blame` exited non-zero or wrote to stderr
//! - `Malformed` → blame output did not match the line-porcelain format
//! - `EmptyInput` → zero attributed lines
//! - `Git`, `Io` → collaborator failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a regular file: {0}")]
    NotAFile(String),

    #[error("Not inside a git working tree: {0}")]
    NotInRepository(String),

    #[error("git blame failed ({}): {}", describe_status(.status), .stderr.trim())]
    QueryFailed { status: Option<i32>, stderr: String },

    #[error("Malformed blame output at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("No attributed lines: the file is empty or has no committed content")]
    EmptyInput,
}

fn describe_status(status: &Option<i32>) -> String {
    match *status {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
