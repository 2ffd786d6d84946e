//! Line-level authorship summary for a single git-tracked file.
//!
//! Runs `git blame --line-porcelain`, attributes every line to its last
//! author, and reports each author's share of the file, when they last
//! touched it and the commit summary that accounts for most of their lines.

pub mod analysis;
pub mod error;
pub mod git;
pub mod models;
pub mod report;

pub use analysis::{analyze, analyze_with};
pub use error::{AppError, Result};
pub use models::{AnalysisResult, AttributionRecord, ContributorSummary, NotableCommit};
