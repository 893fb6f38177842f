pub mod ballot;
pub mod ballot_box;
pub mod tally;

pub use ballot::{normalize, Ballot, BallotError, Entry};
pub use ballot_box::BallotBox;
pub use tally::{TallyEntry, TallyFull, TallyMap};
