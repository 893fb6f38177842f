pub mod plain_text;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::BallotBox;
use sha1::{Digest, Sha1};
use std::fs;
use std::io::{self, Cursor, Read};
use std::path::Path;

/// Ballots read from one input, together with where they came from.
#[derive(Debug)]
pub struct LoadedBallots {
    pub source: String,
    pub sha1: String,
    pub ballot_box: BallotBox,
}

/// Reads a plain-text ballot file, or stdin when `path` is `-`.
pub fn load_ballots(path: &Path, config: &Config) -> Result<LoadedBallots> {
    let bytes = if path == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        bytes
    } else {
        fs::read(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?
    };

    let sha1 = format!("{:x}", Sha1::digest(&bytes));
    let ballot_box = plain_text::read_ballot_box(Cursor::new(bytes), config)?;

    Ok(LoadedBallots {
        source: path.display().to_string(),
        sha1,
        ballot_box,
    })
}
