use crate::error::{Error, Result};
use crate::MAX_CANDIDATES;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Per-run settings, optionally loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Most distinct candidates a ballot or tally may hold.
    pub max_candidates: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_candidates: MAX_CANDIDATES,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()
    }

    pub fn with_max_candidates(mut self, max_candidates: Option<usize>) -> Result<Self> {
        if let Some(max_candidates) = max_candidates {
            self.max_candidates = max_candidates;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.max_candidates == 0 {
            return Err(Error::Config("maxCandidates must be positive".to_string()));
        }
        Ok(self)
    }
}
