use irv_tally::config::Config;
use irv_tally::formats::load_ballots;
use irv_tally::formats::plain_text::read_ballot_box;
use irv_tally::reports::generate_contest_report;
use irv_tally::{find_winner, tabulate, Ballot, BallotBox, Error};
use std::io::Cursor;
use std::path::{Path, PathBuf};

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn winner_of(text: &str) -> Option<String> {
    let mut bb = read_ballot_box(Cursor::new(text), &Config::default()).unwrap();
    find_winner(&mut bb).unwrap()
}

#[test]
fn three_candidates_tied() {
    let mut loaded = load_ballots(&data("three_tied.txt"), &Config::default()).unwrap();
    assert_eq!(loaded.ballot_box.len(), 3);
    assert_eq!(
        find_winner(&mut loaded.ballot_box).unwrap().as_deref(),
        Some("A")
    );
}

#[test]
fn win_on_second_round() {
    let mut loaded = load_ballots(&data("primary.txt"), &Config::default()).unwrap();
    assert_eq!(
        find_winner(&mut loaded.ballot_box).unwrap().as_deref(),
        Some("BIDEN")
    );
}

#[test]
fn example_from_wikipedia() {
    let mut loaded = load_ballots(&data("wikipedia.txt"), &Config::default()).unwrap();
    assert_eq!(loaded.ballot_box.len(), 5);
    assert_eq!(
        find_winner(&mut loaded.ballot_box).unwrap().as_deref(),
        Some("SUE")
    );
}

#[test]
fn empty_input_has_no_winner() {
    assert_eq!(winner_of(""), None);
    assert_eq!(winner_of("%\n%\n"), None);
}

#[test]
fn empty_box_has_no_winner() {
    let mut bb = BallotBox::new();
    assert_eq!(find_winner(&mut bb).unwrap(), None);
}

#[test]
fn majority_needs_more_than_half() {
    // Two votes each: no majority until a loser is eliminated.
    let text = "x\ny\n%\nx\n%\ny\n%\ny\nx\n%\n";
    let mut bb = read_ballot_box(Cursor::new(text), &Config::default()).unwrap();
    let tabulation = tabulate(&mut bb).unwrap();

    assert_eq!(tabulation.rounds[0].total, 4);
    assert_eq!(tabulation.rounds[0].eliminated.as_deref(), Some("X"));
    assert_eq!(tabulation.rounds.len(), 2);
    assert_eq!(tabulation.rounds[1].total, 3);
    assert_eq!(tabulation.winner.as_deref(), Some("Y"));
}

#[test]
fn tally_is_idempotent_on_unmodified_box() {
    let loaded = load_ballots(&data("wikipedia.txt"), &Config::default()).unwrap();
    let first = loaded.ballot_box.tally().unwrap();
    let second = loaded.ballot_box.tally().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.total(), 5);
}

#[test]
fn too_many_candidates_is_fatal() {
    let config = Config::default().with_max_candidates(Some(2)).unwrap();
    let err = read_ballot_box(Cursor::new("a\nb\nc\n"), &config).unwrap_err();
    assert_eq!(err.exit_code(), 3);

    let mut bb = BallotBox::with_max_candidates(2);
    for name in &["a", "b", "c"] {
        let mut ballot = Ballot::with_capacity(2);
        ballot.insert(name.to_string()).unwrap();
        bb.insert(ballot);
    }
    let err = find_winner(&mut bb).unwrap_err();
    assert!(matches!(err, Error::Tally(_)));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn unbounded_max_candidates_finds_winner() {
    let config = Config::default()
        .with_max_candidates(Some(usize::MAX))
        .unwrap();
    let mut bb = read_ballot_box(Cursor::new("a\n%\nb\n%\n"), &config).unwrap();
    assert_eq!(bb.max_candidates(), usize::MAX);
    assert_eq!(find_winner(&mut bb).unwrap().as_deref(), Some("B"));
}

#[test]
fn missing_file_is_reported() {
    let err = load_ballots(&data("missing.txt"), &Config::default()).unwrap_err();
    assert!(matches!(err, Error::File { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn report_records_source_hash() {
    let loaded = load_ballots(&data("primary.txt"), &Config::default()).unwrap();
    let report = generate_contest_report(loaded).unwrap();

    assert_eq!(report.info.sha1.len(), 40);
    assert!(report.info.sha1.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(report.ballot_count, 6);
    assert_eq!(report.summary.winner.as_deref(), Some("BIDEN"));
    assert_eq!(report.summary.total_rounds, 3);
}
