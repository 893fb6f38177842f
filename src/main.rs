mod commands;

use crate::commands::{ballots, report, rounds, winner};
use clap::{Parser, Subcommand};
use colored::Colorize;
use irv_tally::config::Config;
use irv_tally::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "irv", about = "Instant-runoff tabulation of ranked ballots")]
struct Opts {
    /// JSON configuration file.
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    /// Most distinct candidates per ballot and per tally.
    #[clap(long, global = true)]
    max_candidates: Option<usize>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the winner of an election.
    Winner {
        /// Ballot file, or `-` for stdin.
        input: PathBuf,
    },
    /// Print the tally of every round.
    Rounds {
        /// Ballot file, or `-` for stdin.
        input: PathBuf,
    },
    /// Print every ballot with its eliminated choices bracketed.
    Ballots {
        /// Ballot file, or `-` for stdin.
        input: PathBuf,
        /// Show ballots as they stand after tabulation.
        #[clap(long)]
        tabulate: bool,
    },
    /// Write a JSON report of the tabulation.
    Report {
        /// Ballot file, or `-` for stdin.
        input: PathBuf,
        /// Report output path; stdout when omitted.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let opts = Opts::parse();

    if let Err(e) = run(opts) {
        eprintln!("{} {}", "❌".red(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(opts: Opts) -> Result<()> {
    let config = match &opts.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_max_candidates(opts.max_candidates)?;

    match opts.command {
        Command::Winner { input } => winner(&input, &config),
        Command::Rounds { input } => rounds(&input, &config),
        Command::Ballots { input, tabulate } => ballots(&input, &config, tabulate),
        Command::Report { input, output } => report(&input, output.as_deref(), &config),
    }
}
