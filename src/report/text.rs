//! Terminal report: headings, ranked contributor table, notable commits.

use std::io::Write;

use console::{pad_str, style, Alignment};

use crate::models::AnalysisResult;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const PLAIN_RANKS: [&str; 3] = ["#1", "#2", "#3"];

#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Emit ANSI styling
    pub color: bool,
    /// Use emoji headings and medals instead of plain markers
    pub emoji: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            color: console::colors_enabled(),
            emoji: true,
        }
    }
}

impl TextOptions {
    fn heading(&self, icon: &str, title: &str) -> String {
        if self.emoji {
            format!("{} {}", icon, title)
        } else {
            title.to_string()
        }
    }

    fn rank_marker(&self, rank: usize) -> &'static str {
        let markers = if self.emoji { &MEDALS } else { &PLAIN_RANKS };
        markers.get(rank).copied().unwrap_or("  ")
    }
}

pub fn render_text<W: Write>(result: &AnalysisResult, opts: TextOptions, out: &mut W) -> anyhow::Result<()> {
    let color = opts.color;

    writeln!(
        out,
        "{} {}",
        style(opts.heading("📄", "File:")).magenta().bold().force_styling(color),
        result.target_file
    )?;
    writeln!(
        out,
        "{} {}",
        style(opts.heading("📏", "Total lines:")).cyan().bold().force_styling(color),
        result.total_lines
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        style(opts.heading("👥", "Top contributors:")).green().bold().force_styling(color)
    )?;
    let author_width = result
        .contributors
        .iter()
        .map(|c| console::measure_text_width(&c.author))
        .max()
        .unwrap_or(0);
    for (rank, contributor) in result.contributors.iter().enumerate() {
        let author = pad_str(&contributor.author, author_width, Alignment::Left, None);
        writeln!(
            out,
            " {} {} {:>4} {}",
            opts.rank_marker(rank),
            style(author).bold().force_styling(color),
            format!("{}%", contributor.percent),
            style(format!("last seen {}", contributor.last_seen)).dim().force_styling(color)
        )?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        style(opts.heading("💬", "Notable commits:")).yellow().bold().force_styling(color)
    )?;
    let bullet = if opts.emoji { "•" } else { "-" };
    for notable in &result.notable_commits {
        writeln!(
            out,
            " {} “{}” - {}",
            bullet,
            style(&notable.commit).italic().force_styling(color),
            style(&notable.author).bold().force_styling(color)
        )?;
    }

    Ok(())
}
