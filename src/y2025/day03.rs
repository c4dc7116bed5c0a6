use crate::error::{PuzzleError, Result};
use crate::input::malformed;

/// Largest number formed by keeping `batteries` digits of `bank` in order.
///
/// Each digit is the leftmost maximum of the window that still leaves room
/// for the digits after it. `None` when the bank is too short.
fn max_joltage(bank: &[u8], batteries: usize) -> Option<u64> {
    if bank.len() < batteries {return None}
    let mut start = 0;
    let mut joltage = 0;
    for remaining in (0 .. batteries).rev() {
        let window = &bank[start .. bank.len() - remaining];
        let (offset, &digit) = window.iter().enumerate().rev().max_by_key(|&(_, digit)| digit)?;
        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }
    Some(joltage)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let batteries = match part {
        1 => 2,
        2 => 12,
        part => return Err(PuzzleError::NoSuchPart(part)),
    };
    input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()).map(|(ix, line)| {
        let bank = line.trim().bytes().map(|b| match b {
            b'0' ..= b'9' => Ok(b - b'0'),
            _ => Err(malformed(ix + 1, format!("unexpected joltage {:?}", b as char))),
        }).collect::<Result<Vec<_>>>()?;
        max_joltage(&bank, batteries).ok_or_else(||
            malformed(ix + 1, format!("bank of {} batteries cannot supply {batteries}", bank.len()))
        )
    }).sum::<Result<u64>>().map(|total| total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "987654321111111\n811111111111119\n234234234234278\n818181911112111\n";

    #[test]
    fn two_batteries() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "357");
    }

    #[test]
    fn twelve_batteries() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "3121910778619");
    }

    #[test]
    fn picks_leftmost_of_equal_digits() {
        assert_eq!(max_joltage(&[9, 1, 9, 1], 2), Some(99));
        assert_eq!(max_joltage(&[8, 1, 8, 1, 9], 3), Some(889));
    }

    #[test]
    fn whole_bank_when_lengths_match() {
        assert_eq!(max_joltage(&[1, 2, 3], 3), Some(123));
        assert_eq!(max_joltage(&[1, 2], 3), None);
    }

    #[test]
    fn short_bank_is_an_error() {
        let err = solve(2, "12345\n").unwrap_err();
        assert!(err.to_string().contains("cannot supply 12"));
    }

    #[test]
    fn non_digit_line_number_counts_blanks() {
        let err = solve(1, "\n12\n\n1x\n").unwrap_err();
        assert!(err.to_string().contains("line 4"), "{err}");
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(solve(1, "12a4"), Err(PuzzleError::Malformed(_))));
    }
}
