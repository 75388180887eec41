//! `linelife` — Classifies the fate of one-dimensional cellular automaton
//! patterns.
//!
//! Reads one pattern per line from the given file (`#` marks a live cell, any
//! other character a dead cell) and prints one classification per line, in
//! input order: `vanishing`, `blinking`, `gliding`, or `other`.
//!
//! **Usage:**
//! ```text
//! linelife <FILE> [--json]
//! ```
//!
//! Exits non-zero on a missing argument or an unreadable input file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use linelife::Classifier;

/// Classify the long-term fate of 1-D cellular automaton patterns.
#[derive(Parser)]
#[command(
    name = "linelife",
    version,
    about = "Classify the long-term fate of 1-D cellular automaton patterns"
)]
struct Args {
    /// Input file with one pattern per line ('#' marks a live cell).
    file: PathBuf,

    /// Emit one JSON object per pattern instead of plain labels.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("cannot open pattern file {}", args.file.display()))?;
    let reader = BufReader::new(file);

    let mut classifier = Classifier::new();
    for line in reader.lines() {
        let pattern = line.context("failed to read pattern line")?;
        let outcome = classifier.classify(&pattern);
        if args.json {
            println!(
                "{}",
                serde_json::json!({ "pattern": pattern, "outcome": outcome })
            );
        } else {
            println!("{}", outcome);
        }
    }

    Ok(())
}
