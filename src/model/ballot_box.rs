use crate::model::ballot::Ballot;
use crate::model::tally::{TallyFull, TallyMap};
use crate::MAX_CANDIDATES;
use itertools::Itertools;

/// An owned collection of ballots.
///
/// Traversal runs from the most recently inserted ballot to the first one.
/// `BallotBox::new()` is the empty box and does not allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallotBox {
    ballots: Vec<Ballot>,
    max_candidates: usize,
}

impl Default for BallotBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BallotBox {
    pub const fn new() -> Self {
        Self::with_max_candidates(MAX_CANDIDATES)
    }

    /// An empty box whose tallies hold at most `max_candidates` candidates.
    pub const fn with_max_candidates(max_candidates: usize) -> Self {
        Self {
            ballots: Vec::new(),
            max_candidates,
        }
    }

    pub fn insert(&mut self, ballot: Ballot) {
        self.ballots.push(ballot);
    }

    /// Counts the current leader of every ballot into a fresh tally.
    pub fn tally(&self) -> Result<TallyMap, TallyFull> {
        let mut tally = TallyMap::with_capacity(self.max_candidates);
        for ballot in self.iter() {
            ballot.count_into(&mut tally)?;
        }
        Ok(tally)
    }

    /// Eliminates `candidate` from every ballot.
    pub fn eliminate(&mut self, candidate: &str) {
        for ballot in self.ballots.iter_mut() {
            ballot.eliminate(candidate);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ballot> {
        self.ballots.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.ballots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ballots.is_empty()
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Ballots with no active choice left.
    pub fn exhausted(&self) -> usize {
        self.ballots.iter().filter(|b| b.is_exhausted()).count()
    }

    /// Distinct candidate names across all ballots, in traversal order.
    pub fn candidates(&self) -> Vec<&str> {
        self.iter()
            .flat_map(Ballot::entries)
            .map(|entry| entry.name.as_str())
            .unique()
            .collect()
    }
}

impl Extend<Ballot> for BallotBox {
    fn extend<T: IntoIterator<Item = Ballot>>(&mut self, iter: T) {
        for ballot in iter {
            self.insert(ballot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ballot_of(names: &[&str]) -> Ballot {
        let mut ballot = Ballot::new();
        for name in names {
            ballot.insert(name.to_string()).unwrap();
        }
        ballot
    }

    #[test]
    fn test_empty_box() {
        const EMPTY: BallotBox = BallotBox::new();
        assert!(EMPTY.is_empty());
        assert!(EMPTY.tally().unwrap().is_empty());
    }

    #[test]
    fn test_traversal_is_most_recent_first() {
        let mut bb = BallotBox::new();
        bb.insert(ballot_of(&["A"]));
        bb.insert(ballot_of(&["B"]));
        bb.insert(ballot_of(&["C"]));

        let leaders: Vec<_> = bb.iter().map(|b| b.leader().unwrap()).collect();
        assert_eq!(leaders, vec!["C", "B", "A"]);

        let tally = bb.tally().unwrap();
        let order: Vec<_> = tally.iter().map(|e| e.candidate.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_single_ballot_counted_once() {
        let mut bb = BallotBox::new();
        bb.insert(ballot_of(&["A", "B"]));

        let tally = bb.tally().unwrap();
        assert_eq!(tally.lookup("A"), 1);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_eliminate_reaches_every_ballot() {
        let mut bb = BallotBox::new();
        bb.insert(ballot_of(&["A", "B"]));
        bb.insert(ballot_of(&["A", "C"]));
        bb.insert(ballot_of(&["B", "A"]));

        bb.eliminate("A");
        let tally = bb.tally().unwrap();
        assert_eq!(tally.lookup("A"), 0);
        assert_eq!(tally.lookup("B"), 2);
        assert_eq!(tally.lookup("C"), 1);

        bb.eliminate("B");
        bb.eliminate("C");
        assert!(bb.tally().unwrap().is_empty());
        assert_eq!(bb.exhausted(), 3);
    }

    #[test]
    fn test_repeated_tally_is_stable() {
        let mut bb = BallotBox::new();
        bb.insert(ballot_of(&["A", "B"]));
        bb.insert(ballot_of(&["B"]));
        bb.insert(ballot_of(&["C", "A"]));

        assert_eq!(bb.tally().unwrap(), bb.tally().unwrap());
    }

    #[test]
    fn test_tally_respects_max_candidates() {
        let mut bb = BallotBox::with_max_candidates(1);
        bb.insert(ballot_of(&["A"]));
        bb.insert(ballot_of(&["B"]));

        let err = bb.tally().unwrap_err();
        assert_eq!(err.capacity, 1);
    }

    #[test]
    fn test_unbounded_max_candidates_tallies() {
        let mut bb = BallotBox::with_max_candidates(usize::MAX);
        bb.insert(ballot_of(&["A"]));
        bb.insert(ballot_of(&["B", "A"]));

        let tally = bb.tally().unwrap();
        assert_eq!(tally.capacity(), usize::MAX);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_candidates_are_distinct() {
        let mut bb = BallotBox::new();
        bb.insert(ballot_of(&["A", "B"]));
        bb.insert(ballot_of(&["B", "C", "B"]));

        assert_eq!(bb.candidates(), vec!["B", "C", "A"]);
    }
}
