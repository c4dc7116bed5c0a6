use itertools::Itertools;
use std::ops::RangeInclusive;

use crate::error::{PuzzleError, Result};
use crate::input::{malformed, number};

struct Inventory {
    fresh: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

fn parse(input: &str) -> Result<Inventory> {
    let mut lines = input.lines().map(str::trim).enumerate().skip_while(|(_, line)| line.is_empty());
    let mut fresh = vec![];
    for (ix, line) in lines.by_ref().take_while(|(_, line)| !line.is_empty()) {
        let Some((start, end)) = line.split_once('-') else {
            return Err(malformed(ix + 1, format!("{line:?} is not a range")));
        };
        let (start, end) = (number(start)?, number(end)?);
        if start > end {
            return Err(malformed(ix + 1, format!("range {line:?} runs backwards")));
        }
        fresh.push(start ..= end);
    }
    let available = lines.filter(|(_, line)| !line.is_empty())
        .map(|(_, line)| number(line))
        .collect::<Result<_>>()?;
    Ok(Inventory {fresh, available})
}

/// Sorts and merges overlapping or touching ranges.
fn merged(mut ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges.sort_unstable_by_key(|range| *range.start());
    ranges.into_iter().coalesce(|a, b|
        if *b.start() <= a.end().saturating_add(1) {
            Ok(*a.start() ..= *a.end().max(b.end()))
        } else {Err((a, b))}
    ).collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let Inventory {fresh, available} = parse(input)?;
    match part {
        1 => Ok(available.iter().filter(|&&id|
            fresh.iter().any(|range| range.contains(&id))
        ).count().to_string()),
        2 => Ok(merged(fresh).iter().map(|range|
            range.end() - range.start() + 1
        ).sum::<u64>().to_string()),
        part => Err(PuzzleError::NoSuchPart(part)),
    }
}
