//! Per-round vote counts, keyed by candidate name in the order candidates
//! were first seen.
use crate::MAX_CANDIDATES;
use serde::Serialize;
use std::fmt;

/// Raised when a new candidate would exceed the tally's capacity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tally is full ({capacity} candidates); cannot add {candidate}")]
pub struct TallyFull {
    pub capacity: usize,
    pub candidate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub candidate: String,
    pub votes: usize,
}

/// Bounded, insertion-ordered map from candidate to vote count.
///
/// Lookups are linear scans. Insertion order is what makes the tie-breaks in
/// [`TallyMap::max_candidate`] and [`TallyMap::min_candidate`] well defined,
/// so this must not be swapped for a hash map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TallyMap {
    entries: Vec<TallyEntry>,
    #[serde(skip)]
    capacity: usize,
}

impl Default for TallyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyMap {
    pub fn new() -> Self {
        Self::with_capacity(MAX_CANDIDATES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Returns the count for `name`, appending a zeroed entry first if the
    /// candidate has not been seen yet.
    pub fn update_or_insert(&mut self, name: &str) -> Result<&mut usize, TallyFull> {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                if self.entries.len() >= self.capacity {
                    return Err(TallyFull {
                        capacity: self.capacity,
                        candidate: name.to_string(),
                    });
                }
                self.entries.push(TallyEntry {
                    candidate: name.to_string(),
                    votes: 0,
                });
                self.entries.len() - 1
            }
        };

        Ok(&mut self.entries[index].votes)
    }

    pub fn lookup(&self, name: &str) -> usize {
        self.position(name)
            .map(|index| self.entries[index].votes)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.votes).sum()
    }

    /// Candidate with the most votes; ties go to the earliest inserted.
    pub fn max_candidate(&self) -> Option<&str> {
        let mut best: Option<&TallyEntry> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.votes <= current.votes => {}
                _ => best = Some(entry),
            }
        }
        best.map(|entry| entry.candidate.as_str())
    }

    /// Candidate with the fewest non-zero votes; ties go to the latest
    /// inserted. Candidates with no votes are never returned.
    pub fn min_candidate(&self) -> Option<&str> {
        let mut worst: Option<&TallyEntry> = None;
        for entry in self.entries.iter().filter(|entry| entry.votes > 0) {
            match worst {
                Some(current) if entry.votes > current.votes => {}
                _ => worst = Some(entry),
            }
        }
        worst.map(|entry| entry.candidate.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter()
    }

    /// Prints the tally table to stdout.
    pub fn print(&self) {
        print!("{}", self);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.candidate == name)
    }
}

impl fmt::Display for TallyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{:<20} {:>9}", entry.candidate, entry.votes)?;
        }
        Ok(())
    }
}
