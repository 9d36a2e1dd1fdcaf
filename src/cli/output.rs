//! Output handling for the Wordhood CLI: the word file and the summary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordhoodArgs};
use crate::error::Result;
use crate::neighborhood::{LevelStats, WordSet};

/// Summary of a generation run.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub word: String,
    pub distance: usize,
    pub alphabet: String,
    pub mode: String,
    pub output_file: String,
    pub total_words: usize,
    pub duration_ms: u64,
    pub levels: Vec<LevelStats>,
}

/// Join `words` with newlines and write them to `path`, replacing any
/// existing content.
///
/// There is no trailing newline. Words are written in set order unless
/// `sorted` is true.
pub fn write_words(path: &Path, words: &WordSet, sorted: bool) -> Result<()> {
    let mut lines: Vec<&str> = words.iter().map(String::as_str).collect();
    if sorted {
        lines.sort_unstable();
    }
    fs::write(path, lines.join("\n"))?;
    Ok(())
}

/// Output a summary in the format selected on the command line.
pub fn output_summary(summary: &GenerationSummary, args: &WordhoodArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", format_summary_human(summary));
            Ok(())
        }
        OutputFormat::Json => output_json(summary, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &WordhoodArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render a summary as a short human-readable report.
pub fn format_summary_human(summary: &GenerationSummary) -> String {
    let mut out = String::new();
    out.push_str("Generation Summary:\n");
    out.push_str("═══════════════════\n");
    out.push_str(&format!("Word: {}\n", summary.word));
    out.push_str(&format!("Distance: {}\n", summary.distance));
    out.push_str(&format!("Alphabet: {}\n", summary.alphabet));
    out.push_str(&format!("Mode: {}\n", summary.mode));
    out.push_str(&format!("Output: {}\n", summary.output_file));
    out.push_str(&format!("Total words: {}\n", summary.total_words));
    out.push_str(&format!("Duration: {}ms\n", summary.duration_ms));

    if !summary.levels.is_empty() {
        out.push('\n');
        out.push_str(&format!(
            "{:>5}  {:>12}  {:>12}  {:>12}\n",
            "Level", "Input", "Candidates", "Unique"
        ));
        for level in &summary.levels {
            out.push_str(&format!(
                "{:>5}  {:>12}  {:>12}  {:>12}\n",
                level.level, level.input_words, level.candidates, level.frontier_size
            ));
        }
    }

    out
}
