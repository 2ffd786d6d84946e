//! git-credit - who wrote the lines of a file, and when
//!
//! # Usage
//! ```bash
//! git-credit src/main.rs            # Ranked contributors and notable commits
//! git-credit src/main.rs --json     # Same result as JSON
//! git-credit src/main.rs --no-emoji # Plain markers for limited terminals
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use git_credit::report::{render_json, render_text, TextOptions};

/// Show who last changed each line of a file, summarized per author
#[derive(Parser)]
#[command(name = "git-credit", version)]
#[command(about = "Summarize per-author line ownership of a git-tracked file", long_about = None)]
struct Cli {
    /// File to analyze (must be tracked by git)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Use plain text markers instead of emoji
    #[arg(long)]
    no_emoji: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let result = git_credit::analyze(&cli.file)?;

    // Render fully before printing so a failure never leaves partial output.
    let mut buf = Vec::new();
    if cli.json {
        render_json(&result, &mut buf)?;
    } else {
        let opts = TextOptions {
            emoji: !cli.no_emoji,
            ..TextOptions::default()
        };
        render_text(&result, opts, &mut buf)?;
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("analysis failed: {:?}", e);
            eprintln!("{} {}", style("✗").red().for_stderr(), style(e).red().for_stderr());
            ExitCode::FAILURE
        }
    }
}
