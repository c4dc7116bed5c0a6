use itertools::Itertools;
use std::iter::zip;

use crate::error::{PuzzleError, Result};
use crate::input::{malformed, number};
use crate::Solver;

pub const DAYS: [Solver; 1] = [day1];

pub fn day1(part: u8, input: &str) -> Result<String> {
    let mut lefts: Vec<i64> = vec![];
    let mut rights: Vec<i64> = vec![];
    for (ix, line) in input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
        let strs: Vec<&str> = line.split_whitespace().collect();
        let [left, right] = &strs[..] else {
            return Err(malformed(ix + 1, format!("cannot parse {line:?} as two numbers")));
        };
        lefts.push(number(left)?);
        rights.push(number(right)?);
    }

    match part {
        1 => {
            lefts.sort_unstable();
            rights.sort_unstable();
            Ok(zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum::<i64>().to_string())
        }
        2 => {
            let occurrences = rights.iter().counts();
            Ok(lefts.iter().map(|left|
                left * occurrences.get(left).map_or(0, |&count| count as i64)
            ).sum::<i64>().to_string())
        }
        part => Err(PuzzleError::NoSuchPart(part)),
    }
}
