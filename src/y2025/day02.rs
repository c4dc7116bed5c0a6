use std::ops::RangeInclusive;

use crate::error::{PuzzleError, Result};
use crate::input::number;

fn parse(input: &str) -> Result<Vec<RangeInclusive<u64>>> {
    input.trim().split(',').map(str::trim).filter(|s| !s.is_empty()).map(|range| {
        let Some((start, end)) = range.split_once('-') else {
            return Err(PuzzleError::Malformed(format!("range {range:?} has no dash")));
        };
        let (start, end) = (number(start)?, number(end)?);
        if start > end {
            return Err(PuzzleError::Malformed(format!("range {range:?} runs backwards")));
        }
        Ok(start ..= end)
    }).collect()
}

/// Whether the decimal digits of `id` are a single block written out several
/// times over: exactly twice when `only_twice`, otherwise twice or more.
fn is_repeated(id: u64, only_twice: bool) -> bool {
    if id == 0 {return false}
    let digits = id.ilog10() + 1;
    (1 .. digits).filter(|block| digits % block == 0)
        .filter(|block| !only_twice || digits / block == 2)
        .any(|block| {
            // 1001, 10101, ... : the number that stamps a block into every slot
            let stamp = (0 .. digits / block).fold(0u64, |acc, _| acc * 10u64.pow(block) + 1);
            id % stamp == 0
        })
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let only_twice = match part {
        1 => true,
        2 => false,
        part => return Err(PuzzleError::NoSuchPart(part)),
    };
    Ok(parse(input)?.into_iter()
        .flat_map(|range| range.filter(move |&id| is_repeated(id, only_twice)))
        .sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
        1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
        824824821-824824827,2121212118-2121212124\n";

    #[test]
    fn doubled_ids() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "1227775554");
    }

    #[test]
    fn repeated_ids() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "4174379265");
    }

    #[test]
    fn repetition_shapes() {
        assert!(is_repeated(55, true));
        assert!(is_repeated(123123, true));
        assert!(!is_repeated(111, true));
        assert!(is_repeated(111, false));
        assert!(is_repeated(12121212, false));
        assert!(is_repeated(12121212, true));
        assert!(!is_repeated(1010101, false));
        assert!(!is_repeated(7, false));
        assert!(!is_repeated(0, false));
    }

    #[test]
    fn ranges_are_inclusive() {
        assert_eq!(solve(1, "22-22").unwrap(), "22");
    }

    #[test]
    fn rejects_backwards_range() {
        assert!(matches!(solve(1, "30-20"), Err(PuzzleError::Malformed(_))));
    }

    #[test]
    fn rejects_missing_dash() {
        assert!(matches!(solve(2, "11-22,95"), Err(PuzzleError::Malformed(_))));
    }
}
