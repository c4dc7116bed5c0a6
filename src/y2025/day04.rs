use bitvec::prelude::*;
use itertools::Itertools;

use crate::error::{PuzzleError, Result};
use crate::input::malformed;

/// A roll can be reached by a forklift when fewer than this many of its
/// eight neighbours are rolls.
const CROWDED: usize = 4;

struct Floor {
    rows: usize,
    cols: usize,
    rolls: BitVec,
}

impl Floor {
    fn parse(input: &str) -> Result<Floor> {
        let lines = input.lines().map(str::trim_end).filter(|line| !line.is_empty()).collect::<Vec<_>>();
        let cols = lines.first().map_or(0, |line| line.len());
        let mut rolls = BitVec::with_capacity(lines.len() * cols);
        for (ix, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(malformed(ix + 1, format!("row is {} wide, expected {cols}", line.len())));
            }
            for cell in line.bytes() {
                match cell {
                    b'@' => rolls.push(true),
                    b'.' => rolls.push(false),
                    _ => return Err(malformed(ix + 1, format!("unexpected cell {:?}", cell as char))),
                }
            }
        }
        Ok(Floor {rows: lines.len(), cols, rolls})
    }

    fn neighbours(&self, at: usize) -> usize {
        let (ri, ci) = (at / self.cols, at % self.cols);
        (-1isize ..= 1).cartesian_product(-1isize ..= 1)
            .filter(|&delta| delta != (0, 0))
            .filter(|&(rd, cd)| {
                let (nr, nc) = (ri.wrapping_add_signed(rd), ci.wrapping_add_signed(cd));
                nr < self.rows && nc < self.cols && self.rolls[nr * self.cols + nc]
            })
            .count()
    }

    fn accessible(&self) -> Vec<usize> {
        self.rolls.iter_ones().filter(|&at| self.neighbours(at) < CROWDED).collect()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut floor = Floor::parse(input)?;
    match part {
        1 => Ok(floor.accessible().len().to_string()),
        2 => {
            let mut removed = 0;
            loop {
                let batch = floor.accessible();
                if batch.is_empty() {break}
                removed += batch.len();
                for at in batch {floor.rolls.set(at, false)}
            }
            Ok(removed.to_string())
        }
        part => Err(PuzzleError::NoSuchPart(part)),
    }
}
