//! Instant-runoff voting over plain-text ranked ballots.
//!
//! Ballots are read into a [`model::BallotBox`], tallied into
//! [`model::TallyMap`]s, and run through [`tabulator::find_winner`] until a
//! candidate holds a strict majority or no votes remain.

pub mod config;
pub mod error;
pub mod formats;
pub mod model;
pub mod reports;
pub mod tabulator;

pub use error::{Error, Result};
pub use model::{Ballot, BallotBox, TallyMap};
pub use tabulator::{find_winner, tabulate};

/// Most distinct candidates a ballot or tally holds unless configured
/// otherwise.
pub const MAX_CANDIDATES: usize = 16;
