use colored::Colorize;
use irv_tally::config::Config;
use irv_tally::error::Result;
use irv_tally::formats::load_ballots;
use irv_tally::reports::{generate_contest_report, write_report};
use std::path::Path;

pub fn report(input: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let loaded = load_ballots(input, config)?;
    eprintln!(
        "📊 Tabulating {} ballots from {}",
        loaded.ballot_box.len().to_string().bright_yellow(),
        loaded.source.bright_cyan()
    );

    let report = generate_contest_report(loaded)?;
    write_report(&report, output)?;

    if let Some(output) = output {
        eprintln!(
            "✅ Report written: {}",
            output.display().to_string().bright_green()
        );
    }

    Ok(())
}
