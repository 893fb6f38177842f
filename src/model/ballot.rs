use crate::model::tally::{TallyFull, TallyMap};
use crate::MAX_CANDIDATES;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BallotError {
    #[error("ballot is full ({capacity} candidates); cannot add {name}")]
    Full { capacity: usize, name: String },
    #[error("candidate name {raw:?} has no letters")]
    EmptyName { raw: String },
}

/// One ranked choice on a ballot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub active: bool,
}

/// A single voter's ranked ballot.
///
/// Every entry name is non-empty and made only of uppercase ASCII letters.
/// Entries start active and are only ever deactivated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    entries: Vec<Entry>,
    capacity: usize,
}

impl Default for Ballot {
    fn default() -> Self {
        Self::new()
    }
}

impl Ballot {
    pub fn new() -> Self {
        Self::with_capacity(MAX_CANDIDATES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Normalizes `name` and appends it as an active choice.
    pub fn insert(&mut self, mut name: String) -> Result<(), BallotError> {
        let raw = name.clone();
        normalize(&mut name);
        if name.is_empty() {
            return Err(BallotError::EmptyName { raw });
        }

        if self.entries.len() >= self.capacity {
            return Err(BallotError::Full {
                capacity: self.capacity,
                name,
            });
        }

        self.entries.push(Entry { name, active: true });
        Ok(())
    }

    /// The first still-active choice, i.e. where this ballot's vote
    /// currently goes.
    pub fn leader(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.active)
            .map(|entry| entry.name.as_str())
    }

    /// Deactivates every entry naming `name`.
    pub fn eliminate(&mut self, name: &str) {
        for entry in self.entries.iter_mut().filter(|entry| entry.name == name) {
            entry.active = false;
        }
    }

    /// Adds one vote for this ballot's leader, if it has one.
    pub fn count_into(&self, tally: &mut TallyMap) -> Result<(), TallyFull> {
        if let Some(leader) = self.leader() {
            *tally.update_or_insert(leader)? += 1;
        }
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no active choice remains.
    pub fn is_exhausted(&self) -> bool {
        self.leader().is_none()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for Ballot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            if entry.active {
                writeln!(f, " {}", entry.name)?;
            } else {
                writeln!(f, "[{}]", entry.name)?;
            }
        }
        Ok(())
    }
}

/// Strips everything but ASCII letters from `name` and uppercases the rest.
pub fn normalize(name: &mut String) {
    name.retain(|c| c.is_ascii_alphabetic());
    name.make_ascii_uppercase();
}
