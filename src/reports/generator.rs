use super::{ContestInfo, ContestReport, ResultSummary};
use crate::error::Result;
use crate::formats::LoadedBallots;
use crate::tabulator::tabulate;
use instant::Instant;

/// Tabulate a loaded ballot file and build its report.
pub fn generate_contest_report(loaded: LoadedBallots) -> Result<ContestReport> {
    let LoadedBallots {
        source,
        sha1,
        mut ballot_box,
    } = loaded;

    let candidates: Vec<String> = ballot_box
        .candidates()
        .into_iter()
        .map(str::to_string)
        .collect();
    let ballot_count = ballot_box.len();

    let start = Instant::now();
    let tabulation = tabulate(&mut ballot_box)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let summary = ResultSummary {
        winner: tabulation.winner.clone(),
        total_rounds: tabulation.rounds.len(),
        total_ballots: ballot_count,
        exhausted_ballots: ballot_box.exhausted(),
        duration_ms,
    };

    Ok(ContestReport {
        info: ContestInfo {
            source,
            sha1,
            max_candidates: ballot_box.max_candidates(),
        },
        ballot_count,
        candidates,
        results: tabulation.rounds,
        summary,
    })
}
