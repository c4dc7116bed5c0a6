use std::iter::zip;

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::{malformed, number};

/// Free variables left after elimination are enumerated exhaustively.
const MAX_FREE_BUTTONS: usize = 20;
/// Every subset of a machine's buttons is tabulated for the joltage search.
const MAX_JOLTAGE_BUTTONS: usize = 20;

#[derive(Debug)]
struct Machine {
    lights: Vec<bool>,
    buttons: Vec<Vec<usize>>,
    joltage: Option<Vec<u64>>,
}

fn fields<T>(line: usize, text: &str) -> Result<Vec<T>>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    if text.split(',').any(str::is_empty) {
        return Err(malformed(line, format!("empty field in {text:?}")));
    }
    text.split(',').map(number).collect()
}

fn parse(input: &str) -> Result<Vec<Machine>> {
    let token = Regex::new(r"\[([.#]*)\]|\(([\d,]*)\)|\{([\d,]*)\}")?;
    let mut machines = vec![];
    for (ix, line) in input.lines().enumerate() {
        if line.trim().is_empty() {continue}
        let (mut lights, mut buttons, mut joltage) = (None, vec![], None);
        let mut scanned = 0;
        for cap in token.captures_iter(line) {
            let whole = cap.get(0).map_or(scanned .. scanned, |m| m.range());
            if !line[scanned .. whole.start].trim().is_empty() {
                return Err(malformed(ix + 1, format!("unexpected {:?}", line[scanned .. whole.start].trim())));
            }
            scanned = whole.end;
            if let Some(pattern) = cap.get(1) {
                if lights.is_some() {return Err(malformed(ix + 1, "second light pattern"))}
                lights = Some(pattern.as_str().bytes().map(|b| b == b'#').collect::<Vec<_>>());
            } else if let Some(wiring) = cap.get(2) {
                buttons.push(fields::<usize>(ix + 1, wiring.as_str())?);
            } else if let Some(levels) = cap.get(3) {
                if joltage.is_some() {return Err(malformed(ix + 1, "second joltage list"))}
                joltage = Some(fields::<u64>(ix + 1, levels.as_str())?);
            }
        }
        if !line[scanned ..].trim().is_empty() {
            return Err(malformed(ix + 1, format!("unexpected {:?}", line[scanned ..].trim())));
        }
        let Some(lights) = lights else {return Err(malformed(ix + 1, "no light pattern"))};
        if let Some(&index) = buttons.iter().flatten().find(|&&index| index >= lights.len()) {
            return Err(malformed(ix + 1, format!("button wired to light {index} of {}", lights.len())));
        }
        if joltage.as_ref().is_some_and(|levels| levels.len() != lights.len()) {
            return Err(malformed(ix + 1, "joltage list does not match the lights"));
        }
        machines.push(Machine {lights, buttons, joltage});
    }
    Ok(machines)
}

impl Machine {
    /// Fewest presses that toggle the lights into their pattern. Each button
    /// is pressed at most once; the system is solved over GF(2) with one row
    /// per light, button `j` in bit `j` and the target in bit `n`.
    fn fewest_toggles(&self) -> Result<Option<u32>> {
        let n = self.buttons.len();
        if n >= 64 {
            return Err(PuzzleError::TooLarge {what: "button count", size: n, max: 63});
        }
        let mut rows = self.lights.iter().enumerate().map(|(light, &on)| {
            let wired = self.buttons.iter().enumerate()
                .filter(|(_, wiring)| wiring.contains(&light))
                .fold(0u64, |row, (j, _)| row | 1 << j);
            wired | u64::from(on) << n
        }).collect::<Vec<_>>();

        let mut pivots = vec![];
        for col in 0 .. n {
            let rank = pivots.len();
            let Some(p) = (rank .. rows.len()).find(|&r| rows[r] >> col & 1 == 1) else {continue};
            rows.swap(rank, p);
            let pivot = rows[rank];
            for (r, row) in rows.iter_mut().enumerate() {
                if r != rank && *row >> col & 1 == 1 {*row ^= pivot}
            }
            pivots.push(col);
        }
        if rows[pivots.len() ..].iter().any(|&row| row >> n & 1 == 1) {return Ok(None)}

        let free = (0 .. n).filter(|col| !pivots.contains(col)).collect::<Vec<_>>();
        if free.len() > MAX_FREE_BUTTONS {
            return Err(PuzzleError::TooLarge {what: "free button count", size: free.len(), max: MAX_FREE_BUTTONS});
        }
        let fewest = (0u64 .. 1 << free.len()).map(|choice| {
            let mut pressed = free.iter().enumerate()
                .filter(|&(k, _)| choice >> k & 1 == 1)
                .fold(0u64, |x, (_, &col)| x | 1 << col);
            for (row, &col) in rows.iter().zip(&pivots) {
                let value = (row >> n & 1) ^ u64::from((row & pressed).count_ones() % 2 == 1);
                pressed |= value << col;
            }
            pressed.count_ones()
        }).min();
        Ok(fewest)
    }

    /// Fewest presses that raise every counter exactly to its joltage level,
    /// each press adding one to every counter the button is wired to.
    fn fewest_presses(&self, levels: &[u64]) -> Result<Option<u64>> {
        let search = JoltageSearch::new(&self.buttons, levels.len())?;
        Ok(search.fewest(levels, &mut FxHashMap::default()))
    }
}

/// Halving search. The buttons pressed an odd number of times must leave
/// every counter with even headroom, and the rest of any solution is twice a
/// solution for half that headroom. Subsets of buttons are grouped by the
/// parity of their effect so each level only tries the matching ones.
struct JoltageSearch {
    by_parity: FxHashMap<u64, Vec<(u64, Vec<u64>)>>,
}

impl JoltageSearch {
    fn new(buttons: &[Vec<usize>], counters: usize) -> Result<JoltageSearch> {
        if buttons.len() > MAX_JOLTAGE_BUTTONS {
            return Err(PuzzleError::TooLarge {what: "button count", size: buttons.len(), max: MAX_JOLTAGE_BUTTONS});
        }
        if counters >= 64 {
            return Err(PuzzleError::TooLarge {what: "counter count", size: counters, max: 63});
        }
        let mut by_parity: FxHashMap<u64, Vec<(u64, Vec<u64>)>> = FxHashMap::default();
        for subset in 0u64 .. 1 << buttons.len() {
            let mut effect = vec![0; counters];
            for (_, wiring) in buttons.iter().enumerate().filter(|&(j, _)| subset >> j & 1 == 1) {
                for &counter in wiring {effect[counter] += 1}
            }
            by_parity.entry(parity(&effect)).or_default().push((u64::from(subset.count_ones()), effect));
        }
        Ok(JoltageSearch {by_parity})
    }

    fn fewest(&self, levels: &[u64], memo: &mut FxHashMap<Vec<u64>, Option<u64>>) -> Option<u64> {
        if levels.iter().all(|&level| level == 0) {return Some(0)}
        if let Some(&known) = memo.get(levels) {return known}
        let mut best: Option<u64> = None;
        for (presses, effect) in self.by_parity.get(&parity(levels)).into_iter().flatten() {
            if zip(effect, levels).any(|(e, level)| e > level) {continue}
            let half = zip(levels, effect).map(|(level, e)| (level - e) / 2).collect::<Vec<_>>();
            if let Some(rest) = self.fewest(&half, memo) {
                let total = presses + 2 * rest;
                best = Some(best.map_or(total, |best| best.min(total)));
            }
        }
        memo.insert(levels.to_vec(), best);
        best
    }
}

fn parity(levels: &[u64]) -> u64 {
    levels.iter().enumerate().fold(0, |bits, (counter, &level)| bits | (level & 1) << counter)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let machines = parse(input)?;
    let mut total = 0u64;
    for (ix, machine) in machines.iter().enumerate() {
        let presses = match part {
            1 => machine.fewest_toggles()?.map(u64::from),
            2 => {
                let levels = machine.joltage.as_deref()
                    .ok_or_else(|| PuzzleError::Malformed(format!("machine {} has no joltage list", ix + 1)))?;
                machine.fewest_presses(levels)?
            }
            part => return Err(PuzzleError::NoSuchPart(part)),
        };
        let presses = presses.ok_or_else(|| PuzzleError::NoSolution(format!("machine {}", ix + 1)))?;
        debug!(machine = ix + 1, presses, "configured");
        total += presses;
    }
    Ok(total.to_string())
}
