//! Per-line attribution record parsed from `git blame --line-porcelain`.

use serde::Serialize;

/// Who last changed one line of the target file.
///
/// One record per line, in file order. The author string is kept exactly as
/// git reports it; two spellings of the same person stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributionRecord {
    /// Author identity as reported by git
    pub author: String,
    /// Unix timestamp (seconds) of the commit that produced the line
    pub author_time: i64,
    /// First line of the commit message
    pub summary: String,
}

impl AttributionRecord {
    pub fn new(author: impl Into<String>, author_time: i64, summary: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            author_time,
            summary: summary.into(),
        }
    }
}
