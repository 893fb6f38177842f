mod ballots;
mod report;
mod rounds;
mod winner;

pub use ballots::ballots;
pub use report::report;
pub use rounds::rounds;
pub use winner::winner;
