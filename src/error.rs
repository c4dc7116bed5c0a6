//! Error type shared by every solver.

use std::num::ParseIntError;
use std::path::PathBuf;

pub type Result<T, E = PuzzleError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The input file is missing or unreadable.
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid number {text:?}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// Input text that does not follow the day's format.
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("no solver for {year} day {day}")]
    UnknownPuzzle { year: u16, day: u8 },

    #[error("this puzzle has no part {0}")]
    NoSuchPart(u8),

    /// A dimension exceeds what the solver's fixed-width representation holds.
    #[error("{what} is {size}, at most {max} is supported")]
    TooLarge {
        what: &'static str,
        size: usize,
        max: usize,
    },

    #[error("no solution for {0}")]
    NoSolution(String),

    #[error("cycle through node {0:?}")]
    Cycle(String),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}
