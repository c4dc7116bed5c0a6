//! Locating and reading puzzle inputs, plus the field parsers every day uses.

use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::error::{PuzzleError, Result};

/// Path of a puzzle input under `dir`.
///
/// `example` selects the worked example instead of the real input: an empty
/// suffix means `input_example.txt`, anything else `input_example_<suffix>.txt`.
pub fn input_path(dir: &Path, year: u16, day: u8, example: Option<&str>) -> PathBuf {
    let file = match example {
        None => "input.txt".to_string(),
        Some("") => "input_example.txt".to_string(),
        Some(suffix) => format!("input_example_{suffix}.txt"),
    };
    dir.join(year.to_string()).join(format!("Day{day}")).join(file)
}

pub fn read_input(path: &Path) -> Result<String> {
    let input = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), bytes = input.len(), "read puzzle input");
    Ok(input)
}

pub fn number<T>(text: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    text.trim().parse().map_err(|source| PuzzleError::InvalidNumber {
        text: text.to_owned(),
        source,
    })
}

/// `line` is 1-based.
pub fn malformed(line: usize, reason: impl std::fmt::Display) -> PuzzleError {
    PuzzleError::Malformed(format!("line {line}: {reason}"))
}
