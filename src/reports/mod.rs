use crate::error::{Error, Result};
use crate::tabulator::Round;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod generator;

pub use generator::generate_contest_report;

/// Full round-by-round report for one ballot file.
#[derive(Debug, Serialize)]
pub struct ContestReport {
    pub info: ContestInfo,
    #[serde(rename = "ballotCount")]
    pub ballot_count: usize,
    pub candidates: Vec<String>,
    pub results: Vec<Round>,
    pub summary: ResultSummary,
}

#[derive(Debug, Serialize)]
pub struct ContestInfo {
    pub source: String,
    pub sha1: String,
    #[serde(rename = "maxCandidates")]
    pub max_candidates: usize,
}

#[derive(Debug, Serialize)]
pub struct ResultSummary {
    pub winner: Option<String>,
    #[serde(rename = "totalRounds")]
    pub total_rounds: usize,
    #[serde(rename = "totalBallots")]
    pub total_ballots: usize,
    #[serde(rename = "exhaustedBallots")]
    pub exhausted_ballots: usize,
    #[serde(rename = "durationMs")]
    pub duration_ms: u64,
}

/// Writes `report` as pretty JSON to `output`, or to stdout when `None`.
pub fn write_report(report: &ContestReport, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::File {
                path: path.to_path_buf(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
