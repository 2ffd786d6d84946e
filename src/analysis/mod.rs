//! Blame analysis pipeline: query → parse → aggregate.
//!
//! - `aggregate`: contributor shares, recency and notable commits
//! - `recency`: calendar-day "last seen" labels

pub mod aggregate;
pub mod recency;

pub use aggregate::{rounded_percent, summarize};
pub use recency::recency_label;

use std::path::Path;

use chrono::{DateTime, Local, TimeZone};

use crate::error::{AppError, Result};
use crate::git::{parse_line_porcelain, GitBlameQuery, LineAttributionQuery};
use crate::models::AnalysisResult;

/// Analyze `path` with the system `git` and the local clock.
pub fn analyze(path: &Path) -> Result<AnalysisResult> {
    analyze_with(&GitBlameQuery::new(), path, &Local::now())
}

/// Analyze `path` using the given blame source and reference time.
pub fn analyze_with<Q, Tz>(query: &Q, path: &Path, now: &DateTime<Tz>) -> Result<AnalysisResult>
where
    Q: LineAttributionQuery + ?Sized,
    Tz: TimeZone,
{
    let display = path.display().to_string();
    if !path.exists() {
        return Err(AppError::PathNotFound(display));
    }
    if !path.is_file() {
        return Err(AppError::NotAFile(display));
    }

    let raw = query.query(path)?.into_text()?;
    let records = parse_line_porcelain(&raw)?;
    summarize(&display, &records, now)
}
