//! Turns per-line attribution records into the contributor summary.
//!
//! Grouping uses insertion-ordered maps, so every output ordering that is
//! not explicitly sorted follows first appearance in the file:
//! - contributors with equal percentages keep first-appearance order
//! - notable commits are listed in first-appearance order of their author
//! - when two summaries tie for an author's most repeated, the one that
//!   appears first in the file wins

use chrono::{DateTime, TimeZone};
use indexmap::IndexMap;

use crate::analysis::recency::recency_label;
use crate::error::{AppError, Result};
use crate::models::{AnalysisResult, AttributionRecord, ContributorSummary, NotableCommit};

/// Running totals for one author.
#[derive(Debug, Default)]
struct AuthorTally<'a> {
    lines: usize,
    last_commit_time: i64,
    summaries: IndexMap<&'a str, usize>,
}

/// Build the full result for `target_file` from its attribution records.
///
/// Fails with `EmptyInput` when there are no records, since no share can
/// be computed.
pub fn summarize<Tz: TimeZone>(
    target_file: &str,
    records: &[AttributionRecord],
    now: &DateTime<Tz>,
) -> Result<AnalysisResult> {
    if records.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let tallies = tally_by_author(records);
    let total = records.len();

    tracing::info!(
        "Aggregated {} lines across {} authors for {}",
        total,
        tallies.len(),
        target_file
    );

    let mut contributors: Vec<ContributorSummary> = tallies
        .iter()
        .map(|(author, tally)| ContributorSummary {
            author: (*author).to_string(),
            percent: rounded_percent(tally.lines, total),
            lines: tally.lines,
            last_commit_time: tally.last_commit_time,
            last_seen: recency_label(tally.last_commit_time, now),
        })
        .collect();
    // Stable: equal percentages keep first-appearance order.
    contributors.sort_by(|a, b| b.percent.cmp(&a.percent));

    let notable_commits = tallies
        .iter()
        .filter_map(|(author, tally)| {
            most_repeated(&tally.summaries).map(|commit| NotableCommit {
                author: (*author).to_string(),
                commit: commit.to_string(),
            })
        })
        .collect();

    Ok(AnalysisResult {
        target_file: target_file.to_string(),
        total_lines: total,
        contributors,
        notable_commits,
    })
}

fn tally_by_author(records: &[AttributionRecord]) -> IndexMap<&str, AuthorTally<'_>> {
    let mut tallies: IndexMap<&str, AuthorTally<'_>> = IndexMap::new();

    for record in records {
        let tally = tallies.entry(record.author.as_str()).or_insert_with(|| AuthorTally {
            last_commit_time: record.author_time,
            ..Default::default()
        });
        tally.lines += 1;
        tally.last_commit_time = tally.last_commit_time.max(record.author_time);
        *tally.summaries.entry(record.summary.as_str()).or_insert(0) += 1;
    }

    tallies
}

/// The summary with the highest count; ties go to the earliest inserted.
fn most_repeated<'a>(counts: &IndexMap<&'a str, usize>) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for (&summary, &count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((summary, count)),
        }
    }
    best.map(|(summary, _)| summary)
}

/// `part / total * 100` rounded half to even, in exact integer arithmetic.
///
/// 37.5 rounds to 38 and 12.5 to 12. Results are per author and are not
/// adjusted to sum to 100.
pub fn rounded_percent(part: usize, total: usize) -> u8 {
    debug_assert!(total > 0 && part <= total);
    let scaled = part as u128 * 100;
    let total = total as u128;
    let quotient = scaled / total;
    let twice_remainder = (scaled % total) * 2;

    let rounded = if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded as u8
}
