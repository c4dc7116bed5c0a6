//! Cephalopod math worksheet: problems stand side by side in columns, with
//! the operator on the bottom row and blank columns between problems.

use std::ops::Range;

use crate::error::{PuzzleError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {Add, Mul}

#[derive(Debug, PartialEq, Eq)]
struct Problem {
    numbers: Vec<u64>,
    op: Op,
}

impl Problem {
    fn answer(&self) -> u64 {
        match self.op {
            Op::Add => self.numbers.iter().sum(),
            Op::Mul => self.numbers.iter().product(),
        }
    }
}

fn cell(row: &[u8], col: usize) -> u8 {
    row.get(col).copied().unwrap_or(b' ')
}

/// Digits in reading order, spaces skipped. `None` if there are no digits.
fn read_number(cells: impl Iterator<Item = u8>) -> Result<Option<u64>> {
    let mut number = None;
    for cell in cells {
        match cell {
            b' ' => (),
            b'0' ..= b'9' => number = Some(number.unwrap_or(0) * 10 + u64::from(cell - b'0')),
            _ => return Err(PuzzleError::Malformed(format!("unexpected character {:?}", cell as char))),
        }
    }
    Ok(number)
}

/// `columnar` reads each column top to bottom as one number, right to left;
/// otherwise each row of the block is one number.
fn parse(input: &str, columnar: bool) -> Result<Vec<Problem>> {
    let mut rows = input.lines().map(str::as_bytes).collect::<Vec<_>>();
    while rows.last().is_some_and(|row| row.iter().all(|&b| b == b' ')) {rows.pop();}
    let Some((ops, digits)) = rows.split_last() else {return Ok(vec![])};
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let blank = |col: usize| rows.iter().all(|row| cell(row, col) == b' ');

    let mut problems = vec![];
    let mut col = 0;
    while col < width {
        if blank(col) {col += 1; continue}
        let end = (col .. width).find(|&c| blank(c)).unwrap_or(width);
        problems.push(parse_block(ops, digits, col .. end, columnar)?);
        col = end;
    }
    Ok(problems)
}

fn parse_block(ops: &[u8], digits: &[&[u8]], cols: Range<usize>, columnar: bool) -> Result<Problem> {
    let op = match cols.clone().map(|c| cell(ops, c)).filter(|&b| b != b' ').collect::<Vec<_>>()[..] {
        [b'+'] => Op::Add,
        [b'*'] => Op::Mul,
        _ => return Err(PuzzleError::Malformed(format!("problem at columns {cols:?} needs one operator"))),
    };
    let numbers = if columnar {
        cols.clone().rev().map(|c| read_number(digits.iter().map(|row| cell(row, c)))).collect::<Result<Vec<_>>>()?
    } else {
        digits.iter().map(|row| read_number(cols.clone().map(|c| cell(row, c)))).collect::<Result<Vec<_>>>()?
    };
    let numbers: Vec<u64> = numbers.into_iter().flatten().collect();
    if numbers.is_empty() {
        return Err(PuzzleError::Malformed(format!("problem at columns {cols:?} has no numbers")));
    }
    Ok(Problem {numbers, op})
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let columnar = match part {
        1 => false,
        2 => true,
        part => return Err(PuzzleError::NoSuchPart(part)),
    };
    Ok(parse(input, columnar)?.iter().map(Problem::answer).sum::<u64>().to_string())
}
