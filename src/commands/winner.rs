use colored::Colorize;
use irv_tally::config::Config;
use irv_tally::error::Result;
use irv_tally::formats::load_ballots;
use irv_tally::tabulator::find_winner;
use std::path::Path;

pub fn winner(input: &Path, config: &Config) -> Result<()> {
    let mut loaded = load_ballots(input, config)?;
    eprintln!(
        "🗳️  Read {} ballots from {}",
        loaded.ballot_box.len().to_string().bright_yellow(),
        loaded.source.bright_cyan()
    );

    match find_winner(&mut loaded.ballot_box)? {
        Some(winner) => println!("{}", winner),
        None => {
            eprintln!("{}", "⚠️  No votes to count".yellow());
            println!("no winner");
        }
    }

    Ok(())
}
