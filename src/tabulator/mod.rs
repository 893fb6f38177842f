//! Instant-runoff tabulation over a [`BallotBox`].
use crate::error::{Error, Result};
use crate::model::{BallotBox, TallyMap};
use serde::Serialize;
use tracing::{debug, info};

/// One tally-then-maybe-eliminate cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    pub round: usize,
    pub tally: TallyMap,
    pub total: usize,
    pub exhausted: usize,
    pub eliminated: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tabulation {
    pub rounds: Vec<Round>,
    pub winner: Option<String>,
}

/// Runs IRV to completion and returns the winner, or `None` when no ballot
/// carries a vote.
pub fn find_winner(ballot_box: &mut BallotBox) -> Result<Option<String>> {
    Ok(tabulate(ballot_box)?.winner)
}

/// Runs IRV to completion, recording every round.
///
/// A candidate wins once they hold strictly more than half of the votes
/// counted in a round. Until then, the candidate with the fewest non-zero
/// votes (latest first seen, on a tie) is eliminated from every ballot and
/// the box is re-tallied from scratch. Eliminations are applied to
/// `ballot_box` in place.
pub fn tabulate(ballot_box: &mut BallotBox) -> Result<Tabulation> {
    // Every round but the last removes a candidate who held votes.
    let max_rounds = ballot_box.candidates().len() + 1;
    let mut rounds = Vec::new();
    let mut tally = ballot_box.tally()?;

    let winner = loop {
        let total = tally.total();
        if total == 0 {
            debug!(rounds = rounds.len(), "no votes left to count");
            break None;
        }

        if rounds.len() >= max_rounds {
            return Err(Error::NoProgress {
                rounds: rounds.len(),
            });
        }

        let leader = tally.max_candidate().map(str::to_string);
        let leader_votes = leader.as_deref().map(|c| tally.lookup(c)).unwrap_or(0);
        let has_majority = leader_votes as f64 > total as f64 / 2.0;
        let eliminated = if has_majority {
            None
        } else {
            tally.min_candidate().map(str::to_string)
        };

        debug!(
            round = rounds.len() + 1,
            total,
            leader = leader.as_deref().unwrap_or("-"),
            leader_votes,
            eliminated = eliminated.as_deref().unwrap_or("-"),
            "tallied round"
        );

        rounds.push(Round {
            round: rounds.len() + 1,
            tally,
            total,
            exhausted: ballot_box.exhausted(),
            eliminated: eliminated.clone(),
        });

        if has_majority {
            break leader;
        }

        if let Some(candidate) = &eliminated {
            ballot_box.eliminate(candidate);
        }
        tally = ballot_box.tally()?;
    };

    info!(
        winner = winner.as_deref().unwrap_or("none"),
        rounds = rounds.len(),
        "tabulation finished"
    );

    Ok(Tabulation { rounds, winner })
}
