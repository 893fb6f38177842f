use crate::model::{BallotError, TallyFull};
use std::path::PathBuf;

/// Everything that can stop a run. None of these are retried; `main` reports
/// them and exits with [`Error::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ballot_insert: {0}")]
    Ballot(#[from] BallotError),
    #[error("count_ballot: {0}")]
    Tally(#[from] TallyFull),
    #[error("tabulation made no progress after {rounds} rounds")]
    NoProgress { rounds: usize },
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Ballot(_) => 3,
            Error::Tally(_) => 4,
            Error::NoProgress { .. } => 5,
            Error::File { .. } | Error::Io(_) | Error::Serialization(_) | Error::Config(_) => 1,
        }
    }
}
