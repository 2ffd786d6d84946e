//! Aggregated output of one analysis run.
//!
//! - `ContributorSummary`: share of lines and recency per author
//! - `NotableCommit`: each author's most repeated commit summary
//! - `AnalysisResult`: everything the renderers need

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributorSummary {
    pub author: String,
    /// Rounded share of total lines, 0-100. Not normalized across authors.
    pub percent: u8,
    /// Number of lines attributed to this author
    pub lines: usize,
    /// Latest author timestamp among this author's lines
    pub last_commit_time: i64,
    /// Recency label for `last_commit_time` ("today", "yesterday", "N days ago")
    pub last_seen: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotableCommit {
    pub author: String,
    pub commit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// The analyzed path, as given by the caller
    pub target_file: String,
    pub total_lines: usize,
    /// Sorted by `percent`, highest first
    pub contributors: Vec<ContributorSummary>,
    /// One per author, in order of first appearance in the file
    pub notable_commits: Vec<NotableCommit>,
}
