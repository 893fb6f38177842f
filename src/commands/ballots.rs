use irv_tally::config::Config;
use irv_tally::error::Result;
use irv_tally::formats::load_ballots;
use irv_tally::formats::plain_text::SENTINEL;
use irv_tally::tabulator::tabulate;
use std::path::Path;

/// Renders every ballot, most recently read first. With `tabulated`, shows
/// which choices were eliminated by the end of the count.
pub fn ballots(input: &Path, config: &Config, tabulated: bool) -> Result<()> {
    let mut loaded = load_ballots(input, config)?;
    if tabulated {
        tabulate(&mut loaded.ballot_box)?;
    }

    for ballot in loaded.ballot_box.iter() {
        print!("{}", ballot);
        println!("{}", SENTINEL);
    }

    Ok(())
}
