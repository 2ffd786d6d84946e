//! Runs `git blame --line-porcelain` for a single file.
//!
//! The repository is located with libgit2 starting from the file's own
//! directory, so the tool works regardless of the caller's working directory.
//! The blame itself is delegated to the `git` executable, whose porcelain
//! output is what the parser understands.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository;

use crate::error::{AppError, Result};

/// Raw result of one blame query: captured streams plus the exit code.
#[derive(Debug, Clone)]
pub struct BlameOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal
    pub status: Option<i32>,
}

impl BlameOutput {
    /// Returns the porcelain text, or `QueryFailed` if the process exited
    /// non-zero or wrote anything to stderr. Partial output is never returned.
    pub fn into_text(self) -> Result<String> {
        if self.status != Some(0) || !self.stderr.trim().is_empty() {
            return Err(AppError::QueryFailed {
                status: self.status,
                stderr: self.stderr,
            });
        }
        Ok(self.stdout)
    }
}

/// Source of per-line attribution text for a file.
pub trait LineAttributionQuery {
    fn query(&self, path: &Path) -> Result<BlameOutput>;
}

/// Queries the `git` executable found on `PATH`.
#[derive(Debug, Clone)]
pub struct GitBlameQuery {
    program: PathBuf,
}

impl Default for GitBlameQuery {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }
}

impl GitBlameQuery {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineAttributionQuery for GitBlameQuery {
    fn query(&self, path: &Path) -> Result<BlameOutput> {
        let (workdir, relative) = locate_in_repository(path)?;

        tracing::debug!(
            "Running {} blame --line-porcelain -- {} in {}",
            self.program.display(),
            relative.display(),
            workdir.display()
        );

        let output = Command::new(&self.program)
            .args(["blame", "--line-porcelain", "--"])
            .arg(&relative)
            .current_dir(&workdir)
            .output()?;

        Ok(BlameOutput {
            // Content lines may hold arbitrary bytes; only metadata lines are read.
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

/// Find the working tree containing `path` and the path relative to it.
fn locate_in_repository(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let display = path.display().to_string();
    let absolute = fs::canonicalize(path).map_err(|_| AppError::PathNotFound(display.clone()))?;
    let parent = absolute
        .parent()
        .ok_or_else(|| AppError::NotAFile(display.clone()))?;

    let repo = Repository::discover(parent).map_err(|_| AppError::NotInRepository(display.clone()))?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| AppError::NotInRepository(display.clone()))?;
    let workdir = fs::canonicalize(workdir)?;

    let relative = absolute
        .strip_prefix(&workdir)
        .map_err(|_| AppError::NotInRepository(display))?
        .to_path_buf();

    Ok((workdir, relative))
}
