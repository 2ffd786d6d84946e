//! Parser for `git blame --line-porcelain` output.
//!
//! Every line of the blamed file produces one block:
//!
//! ```text
//! <sha> <orig-line> <final-line> [<group-size>]
//! author <name>
//! author-mail <email>
//! author-time <unix seconds>
//! ...
//! summary <first line of the message>
//! filename <path>
//! \t<line content>
//! ```
//!
//! Only `author`, `author-time` and `summary` are read. The tab-prefixed
//! content line closes the block.

use crate::error::{AppError, Result};
use crate::models::AttributionRecord;

const AUTHOR: &str = "author ";
const AUTHOR_TIME: &str = "author-time ";
const SUMMARY: &str = "summary ";

/// Fields collected for the block currently being read.
#[derive(Debug, Default)]
struct PendingRecord {
    author: Option<String>,
    author_time: Option<i64>,
    summary: Option<String>,
}

impl PendingRecord {
    fn is_empty(&self) -> bool {
        self.author.is_none() && self.author_time.is_none() && self.summary.is_none()
    }

    fn finish(self, line: usize) -> Result<AttributionRecord> {
        let missing = |field: &str| AppError::Malformed {
            line,
            reason: format!("block is missing the {} field", field),
        };

        Ok(AttributionRecord {
            author: self.author.ok_or_else(|| missing("author"))?,
            author_time: self.author_time.ok_or_else(|| missing("author-time"))?,
            summary: self.summary.ok_or_else(|| missing("summary"))?,
        })
    }
}

/// Parse line-porcelain text into one record per blamed line, in file order.
pub fn parse_line_porcelain(raw: &str) -> Result<Vec<AttributionRecord>> {
    let mut records = Vec::new();
    let mut pending = PendingRecord::default();
    let mut last_line = 0;

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;

        if line.starts_with('\t') {
            if !pending.is_empty() {
                records.push(std::mem::take(&mut pending).finish(line_no)?);
            }
        } else if let Some(author) = line.strip_prefix(AUTHOR) {
            pending.author = Some(author.to_string());
        } else if let Some(time) = line.strip_prefix(AUTHOR_TIME) {
            let time = time.trim().parse::<i64>().map_err(|_| AppError::Malformed {
                line: line_no,
                reason: format!("author-time is not an integer: {:?}", time),
            })?;
            pending.author_time = Some(time);
        } else if let Some(summary) = line.strip_prefix(SUMMARY) {
            pending.summary = Some(summary.to_string());
        }
    }

    if !pending.is_empty() {
        return Err(AppError::Malformed {
            line: last_line,
            reason: "output ended before the block's content line".to_string(),
        });
    }

    tracing::debug!("Parsed {} blame records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(sha: &str, line: usize, author: &str, time: i64, summary: &str, content: &str) -> String {
        format!(
            "{sha} {line} {line} 1\n\
             author {author}\n\
             author-mail <{author}@example.com>\n\
             author-time {time}\n\
             author-tz +0000\n\
             committer {author}\n\
             committer-mail <{author}@example.com>\n\
             committer-time {time}\n\
             committer-tz +0000\n\
             summary {summary}\n\
             filename src/lib.rs\n\
             \t{content}\n"
        )
    }

    fn sample() -> String {
        let a = "a".repeat(40);
        let b = "b".repeat(40);
        [
            block(&a, 1, "Ada", 1_700_000_000, "feat: init", "fn main() {"),
            block(&b, 2, "Grace", 1_700_100_000, "fix: typo", "    println!();"),
            block(&a, 3, "Ada", 1_700_000_000, "feat: init", "}"),
        ]
        .concat()
    }

    #[test]
    fn one_record_per_block_in_order() {
        let records = parse_line_porcelain(&sample()).unwrap();
        assert_eq!(
            records,
            vec![
                AttributionRecord::new("Ada", 1_700_000_000, "feat: init"),
                AttributionRecord::new("Grace", 1_700_100_000, "fix: typo"),
                AttributionRecord::new("Ada", 1_700_000_000, "feat: init"),
            ]
        );
    }

    #[test]
    fn parsing_twice_gives_same_records() {
        let raw = sample();
        assert_eq!(
            parse_line_porcelain(&raw).unwrap(),
            parse_line_porcelain(&raw).unwrap()
        );
    }

    #[test]
    fn content_that_looks_like_metadata_is_ignored() {
        let a = "a".repeat(40);
        let raw = block(&a, 1, "Ada", 1, "init", "author Mallory");
        let records = parse_line_porcelain(&raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author, "Ada");
    }

    #[test]
    fn previous_and_boundary_lines_are_ignored() {
        let raw = "cafe 1 1 1\n\
                   author Ada\n\
                   author-time 10\n\
                   summary init\n\
                   previous beef src/old.rs\n\
                   boundary\n\
                   filename src/lib.rs\n\
                   \tcontent\n";
        let records = parse_line_porcelain(raw).unwrap();
        assert_eq!(records, vec![AttributionRecord::new("Ada", 10, "init")]);
    }

    #[test]
    fn empty_summary_is_kept() {
        let raw = "cafe 1 1 1\nauthor Ada\nauthor-time 10\nsummary \n\tx\n";
        let records = parse_line_porcelain(raw).unwrap();
        assert_eq!(records[0].summary, "");
    }

    #[test]
    fn empty_output_gives_no_records() {
        assert!(parse_line_porcelain("").unwrap().is_empty());
    }

    #[test]
    fn stray_content_line_is_skipped() {
        let raw = "\torphan\ncafe 1 1 1\nauthor Ada\nauthor-time 10\nsummary init\n\tx\n";
        assert_eq!(parse_line_porcelain(raw).unwrap().len(), 1);
    }

    #[test]
    fn missing_author_is_malformed() {
        let raw = "cafe 1 1 1\nauthor-time 10\nsummary init\n\tx\n";
        match parse_line_porcelain(raw) {
            Err(AppError::Malformed { line, reason }) => {
                assert_eq!(line, 4);
                assert!(reason.contains("author"));
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_time_is_malformed() {
        let raw = "cafe 1 1 1\nauthor Ada\nauthor-time soon\nsummary init\n\tx\n";
        assert!(matches!(
            parse_line_porcelain(raw),
            Err(AppError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn truncated_block_is_malformed() {
        let raw = "cafe 1 1 1\nauthor Ada\nauthor-time 10\n";
        assert!(matches!(
            parse_line_porcelain(raw),
            Err(AppError::Malformed { .. })
        ));
    }
}
