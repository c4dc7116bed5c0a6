//! Solutions to the 2024 and 2025 puzzle events.
//!
//! Every day is a [`Solver`]: it takes the part number and the whole input
//! text and returns the answer rendered as a string.

pub mod error;
pub mod input;
pub mod y2024;
pub mod y2025;

pub use error::{PuzzleError, Result};

pub type Solver = fn(u8, &str) -> Result<String>;

pub fn solver(year: u16, day: u8) -> Result<Solver> {
    let days: &[Solver] = match year {
        2024 => &y2024::DAYS,
        2025 => &y2025::DAYS,
        _ => &[],
    };
    usize::from(day)
        .checked_sub(1)
        .and_then(|ix| days.get(ix))
        .copied()
        .ok_or(PuzzleError::UnknownPuzzle { year, day })
}
