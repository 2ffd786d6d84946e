use std::io::Write;

use crate::models::AnalysisResult;

/// Write the result as pretty-printed JSON followed by a newline.
pub fn render_json<W: Write>(result: &AnalysisResult, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContributorSummary, NotableCommit};

    #[test]
    fn field_names_and_order() {
        let result = AnalysisResult {
            target_file: "src/lib.rs".to_string(),
            total_lines: 4,
            contributors: vec![ContributorSummary {
                author: "Ada".to_string(),
                percent: 100,
                lines: 4,
                last_commit_time: 1_700_000_000,
                last_seen: "today".to_string(),
            }],
            notable_commits: vec![NotableCommit {
                author: "Ada".to_string(),
                commit: "feat: init".to_string(),
            }],
        };

        let mut buf = Vec::new();
        render_json(&result, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["target_file"], "src/lib.rs");
        assert_eq!(value["total_lines"], 4);
        assert_eq!(value["contributors"][0]["percent"], 100);
        assert_eq!(value["contributors"][0]["last_seen"], "today");
        assert_eq!(value["notable_commits"][0]["commit"], "feat: init");
    }
}
