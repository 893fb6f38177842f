use colored::Colorize;
use irv_tally::config::Config;
use irv_tally::error::Result;
use irv_tally::formats::load_ballots;
use irv_tally::tabulator::tabulate;
use itertools::Itertools;
use std::path::Path;

/// Prints the tally of every round and the final result.
pub fn rounds(input: &Path, config: &Config) -> Result<()> {
    let mut loaded = load_ballots(input, config)?;
    let ballot_box = &mut loaded.ballot_box;

    println!(
        "🗳️  {} ballots, candidates: {}",
        ballot_box.len().to_string().bright_yellow(),
        ballot_box.candidates().iter().join(", ").bright_cyan()
    );

    let tabulation = tabulate(ballot_box)?;

    for round in &tabulation.rounds {
        println!();
        println!(
            "{} {}",
            format!("Round {}", round.round).bright_white().bold(),
            format!("({} votes, {} exhausted)", round.total, round.exhausted).dimmed()
        );
        round.tally.print();
        if let Some(eliminated) = &round.eliminated {
            println!("  ❌ Eliminated {}", eliminated.red());
        }
    }

    println!();
    match &tabulation.winner {
        Some(winner) => println!(
            "🏆 {}: {}",
            "Winner".bright_white().bold(),
            winner.bright_green().bold()
        ),
        None => println!("{}", "No winner: no votes to count".yellow()),
    }

    Ok(())
}
