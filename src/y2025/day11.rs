use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{PuzzleError, Result};
use crate::input::malformed;

type Graph<'a> = FxHashMap<&'a str, Vec<&'a str>>;

const EXIT: &str = "out";

fn parse(input: &str) -> Result<Graph<'_>> {
    let mut graph = Graph::default();
    for (ix, line) in input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
        let Some((device, outputs)) = line.split_once(':') else {
            return Err(malformed(ix + 1, format!("{line:?} has no ':'")));
        };
        if graph.insert(device.trim(), outputs.split_whitespace().collect()).is_some() {
            return Err(malformed(ix + 1, format!("device {:?} listed twice", device.trim())));
        }
    }
    Ok(graph)
}

/// Counts paths to the exit, memoized on the node and the set of waypoints
/// already passed (bit `i` for `waypoints[i]`).
struct PathCounter<'g, 'a> {
    graph: &'g Graph<'a>,
    waypoints: &'g [&'g str],
    memo: FxHashMap<(&'a str, u32), u64>,
    on_path: FxHashSet<&'a str>,
}

impl<'g, 'a> PathCounter<'g, 'a> {
    fn new(graph: &'g Graph<'a>, waypoints: &'g [&'g str]) -> Self {
        PathCounter {graph, waypoints, memo: FxHashMap::default(), on_path: FxHashSet::default()}
    }

    fn count(&mut self, node: &'a str, seen: u32) -> Result<u64> {
        let seen = self.waypoints.iter().enumerate()
            .filter(|&(_, &w)| w == node)
            .fold(seen, |seen, (i, _)| seen | 1 << i);
        if node == EXIT {
            return Ok(u64::from(seen.count_ones() as usize == self.waypoints.len()));
        }
        if let Some(&paths) = self.memo.get(&(node, seen)) {return Ok(paths)}
        if !self.on_path.insert(node) {return Err(PuzzleError::Cycle(node.to_string()))}

        let graph = self.graph;
        let mut paths = 0;
        for &next in graph.get(node).into_iter().flatten() {
            paths += self.count(next, seen)?;
        }
        self.on_path.remove(node);
        self.memo.insert((node, seen), paths);
        Ok(paths)
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let graph = parse(input)?;
    let (start, waypoints) = match part {
        1 => ("you", &[] as &[&str]),
        2 => ("svr", &["dac", "fft"] as &[&str]),
        part => return Err(PuzzleError::NoSuchPart(part)),
    };
    Ok(PathCounter::new(&graph, waypoints).count(start, 0)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const WAYPOINT_EXAMPLE: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    #[test]
    fn paths_from_you() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "5");
    }

    #[test]
    fn paths_through_dac_and_fft() {
        assert_eq!(solve(2, WAYPOINT_EXAMPLE).unwrap(), "2");
    }

    #[test]
    fn waypoints_filter_paths() {
        let graph = parse(WAYPOINT_EXAMPLE).unwrap();
        assert_eq!(PathCounter::new(&graph, &[]).count("svr", 0).unwrap(), 8);
        assert_eq!(PathCounter::new(&graph, &["fft"]).count("svr", 0).unwrap(), 4);
    }

    #[test]
    fn missing_start_has_no_paths() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "0");
    }

    #[test]
    fn cycle_is_reported() {
        let err = solve(1, "you: a\na: b\nb: a out\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Cycle(ref node) if node == "a"));
    }

    #[test]
    fn rejects_line_without_colon() {
        assert!(matches!(solve(1, "you out\n"), Err(PuzzleError::Malformed(_))));
    }
}
