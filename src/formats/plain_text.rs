//! Line-oriented ballot format: one candidate per line, each ballot ended by
//! a line holding only `%` or by the end of input.
use crate::config::Config;
use crate::error::Result;
use crate::model::{Ballot, BallotBox, BallotError};
use std::io::BufRead;
use tracing::warn;

pub const SENTINEL: &str = "%";

/// Reads the next ballot from `reader`.
///
/// Returns `Ok(None)` once input is exhausted and no candidate was read.
/// Lines without any letters are skipped.
pub fn read_ballot<R: BufRead>(reader: &mut R, capacity: usize) -> Result<Option<Ballot>> {
    let mut ballot = Ballot::with_capacity(capacity);
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(if ballot.is_empty() { None } else { Some(ballot) });
        }

        let name = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if name == SENTINEL {
            return Ok(Some(ballot));
        }

        match ballot.insert(name.to_string()) {
            Ok(()) => {}
            Err(BallotError::EmptyName { raw }) => {
                if !raw.trim().is_empty() {
                    warn!(line = %raw, "skipping candidate with no letters");
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Reads every ballot in `reader` into a new box.
pub fn read_ballot_box<R: BufRead>(mut reader: R, config: &Config) -> Result<BallotBox> {
    let mut ballot_box = BallotBox::with_max_candidates(config.max_candidates);
    while let Some(ballot) = read_ballot(&mut reader, config.max_candidates)? {
        ballot_box.insert(ballot);
    }
    Ok(ballot_box)
}
