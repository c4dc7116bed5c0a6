use bitvec::prelude::*;

use crate::error::{PuzzleError, Result};
use crate::input::malformed;

struct Manifold<'a> {
    rows: Vec<&'a [u8]>,
    start: (usize, usize),
}

impl<'a> Manifold<'a> {
    fn parse(input: &'a str) -> Result<Manifold<'a>> {
        let rows = input.lines().map(|line| line.trim_end().as_bytes())
            .filter(|row| !row.is_empty()).collect::<Vec<_>>();
        let width = rows.first().map_or(0, |row| row.len());
        let mut start = None;
        for (ri, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(malformed(ri + 1, format!("row is {} wide, expected {width}", row.len())));
            }
            for (ci, &cell) in row.iter().enumerate() {
                match cell {
                    b'.' | b'^' => (),
                    b'S' if start.is_none() => start = Some((ri, ci)),
                    b'S' => return Err(malformed(ri + 1, "second beam source")),
                    _ => return Err(malformed(ri + 1, format!("unexpected cell {:?}", cell as char))),
                }
            }
        }
        let start = start.ok_or_else(|| PuzzleError::Malformed("no beam source 'S'".into()))?;
        Ok(Manifold {rows, start})
    }

    fn width(&self) -> usize {self.rows[0].len()}

    fn rows_below_start(&self) -> impl Iterator<Item = &&'a [u8]> + '_ {
        self.rows[self.start.0 + 1 ..].iter()
    }

    /// Splitters that some beam reaches. Beams meeting in a column merge.
    fn splits(&self) -> usize {
        let width = self.width();
        let mut beams = bitvec![0; width];
        beams.set(self.start.1, true);
        let mut splits = 0;
        for row in self.rows_below_start() {
            let mut next = bitvec![0; width];
            for col in beams.iter_ones() {
                if row[col] == b'^' {
                    splits += 1;
                    if col > 0 {next.set(col - 1, true)}
                    if col + 1 < width {next.set(col + 1, true)}
                } else {
                    next.set(col, true);
                }
            }
            beams = next;
        }
        splits
    }

    /// Every splitter doubles the timelines passing through it; the count
    /// per column is carried row by row. A beam split off the side of the
    /// manifold ends its timeline there.
    fn timelines(&self) -> u128 {
        let width = self.width();
        let mut counts = vec![0u128; width];
        counts[self.start.1] = 1;
        let mut escaped = 0;
        for row in self.rows_below_start() {
            let mut next = vec![0u128; width];
            for (col, &count) in counts.iter().enumerate().filter(|&(_, &count)| count > 0) {
                if row[col] != b'^' {
                    next[col] += count;
                    continue;
                }
                for side in [col.checked_sub(1), Some(col + 1).filter(|&c| c < width)] {
                    match side {
                        Some(c) => next[c] += count,
                        None => escaped += count,
                    }
                }
            }
            counts = next;
        }
        counts.iter().sum::<u128>() + escaped
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let manifold = Manifold::parse(input)?;
    match part {
        1 => Ok(manifold.splits().to_string()),
        2 => Ok(manifold.timelines().to_string()),
        part => Err(PuzzleError::NoSuchPart(part)),
    }
}
