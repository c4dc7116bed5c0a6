//! Safe dial: a ring of 100 positions that starts at 50.

use crate::error::{PuzzleError, Result};
use crate::input::{malformed, number};

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {Left(i64), Right(i64)}

impl Turn {
    fn apply(self, position: i64) -> i64 {
        match self {
            Turn::Left(steps) => (position - steps).rem_euclid(DIAL_SIZE),
            Turn::Right(steps) => (position + steps).rem_euclid(DIAL_SIZE),
        }
    }

    /// Clicks during this turn at which the dial shows 0, including the last one.
    fn zero_clicks(self, position: i64) -> i64 {
        match self {
            Turn::Right(steps) => (position + steps) / DIAL_SIZE,
            Turn::Left(steps) if position == 0 => steps / DIAL_SIZE,
            Turn::Left(steps) if steps >= position => (steps - position) / DIAL_SIZE + 1,
            Turn::Left(_) => 0,
        }
    }
}

fn parse(input: &str) -> Result<Vec<Turn>> {
    input.lines().enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ix, line)| {
            let line = line.trim();
            let steps = || number::<u32>(&line[1..]).map(i64::from);
            match line.as_bytes()[0] {
                b'L' => Ok(Turn::Left(steps()?)),
                b'R' => Ok(Turn::Right(steps()?)),
                _ => Err(malformed(ix + 1, format!("unknown direction in {line:?}"))),
            }
        })
        .collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let turns = parse(input)?;
    let mut position = START;
    let zeros: i64 = match part {
        1 => turns.iter().map(|turn| {
            position = turn.apply(position);
            (position == 0) as i64
        }).sum(),
        2 => turns.iter().map(|turn| {
            let clicks = turn.zero_clicks(position);
            position = turn.apply(position);
            clicks
        }).sum(),
        part => return Err(PuzzleError::NoSuchPart(part)),
    };
    Ok(zeros.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn stops_on_zero() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "3");
    }

    #[test]
    fn passes_through_zero() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "6");
    }

    #[test]
    fn long_turn_wraps_many_times() {
        assert_eq!(solve(2, "R1000").unwrap(), "10");
        assert_eq!(solve(2, "L1000").unwrap(), "10");
    }

    #[test]
    fn leaving_zero_is_not_a_click() {
        // 50 -> 0 counts once, 0 -> 95 does not
        assert_eq!(solve(2, "L50\nL5\n").unwrap(), "1");
        assert_eq!(solve(2, "L50\nL100\n").unwrap(), "2");
    }

    #[test]
    fn turn_arithmetic() {
        assert_eq!(Turn::Left(68).apply(50), 82);
        assert_eq!(Turn::Right(48).apply(52), 0);
        assert_eq!(Turn::Right(60).apply(95), 55);
        assert_eq!(Turn::Right(60).zero_clicks(95), 1);
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = solve(1, "L5\nU3\n").unwrap_err();
        assert_eq!(err.to_string(), "malformed input: line 2: unknown direction in \"U3\"");
    }

    #[test]
    fn rejects_negative_steps() {
        assert!(matches!(solve(1, "R-4"), Err(PuzzleError::InvalidNumber { .. })));
    }
}
