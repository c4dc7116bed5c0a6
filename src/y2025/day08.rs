use itertools::Itertools;
use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::{malformed, number};

/// The worked example has 20 junction boxes and joins its 10 closest pairs;
/// real inputs join 1000.
const EXAMPLE_BOXES: usize = 20;
const EXAMPLE_CONNECTIONS: usize = 10;
const CONNECTIONS: usize = 1000;

type Point = [i64; 3];

struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Circuits {
    fn new(n: usize) -> Circuits {
        Circuits {parent: (0 .. n).collect(), size: vec![1; n], count: n}
    }

    fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Joins the circuits of `a` and `b`; false if they were already one.
    fn join(&mut self, a: usize, b: usize) -> bool {
        let (a, b) = (self.root(a), self.root(b));
        if a == b {return false}
        let (big, small) = if self.size[a] >= self.size[b] {(a, b)} else {(b, a)};
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.count -= 1;
        true
    }

    fn sizes(&self) -> Vec<usize> {
        (0 .. self.parent.len()).filter(|&x| self.parent[x] == x).map(|x| self.size[x]).collect()
    }
}

fn parse(input: &str) -> Result<Vec<Point>> {
    input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()).map(|(ix, line)| {
        let coords = line.split(',').map(number).collect::<Result<Vec<i64>>>()?;
        <Point>::try_from(coords).map_err(|coords|
            malformed(ix + 1, format!("expected 3 coordinates, got {}", coords.len()))
        )
    }).collect()
}

/// Index pairs ordered from the closest to the farthest apart.
fn closest_pairs(boxes: &[Point]) -> Vec<(usize, usize)> {
    let distance = |a: &Point, b: &Point| -> i64 {(0 .. 3).map(|k| (a[k] - b[k]).pow(2)).sum()};
    (0 .. boxes.len()).tuple_combinations()
        .sorted_by_cached_key(|&(i, j)| (distance(&boxes[i], &boxes[j]), i, j))
        .collect()
}

/// Product of the three largest circuits after joining the `connections` closest pairs.
fn largest_circuits(boxes: &[Point], connections: usize) -> Result<usize> {
    let mut circuits = Circuits::new(boxes.len());
    for (i, j) in closest_pairs(boxes).into_iter().take(connections) {
        circuits.join(i, j);
    }
    let sizes = circuits.sizes();
    debug!(circuits = sizes.len(), "joined {connections} closest pairs");
    if sizes.len() < 3 {
        return Err(PuzzleError::NoSolution(format!("only {} circuits remain", sizes.len())));
    }
    Ok(sizes.into_iter().sorted_unstable_by(|a, b| b.cmp(a)).take(3).product())
}

/// X coordinates multiplied for the pair whose join leaves a single circuit.
fn last_join(boxes: &[Point]) -> Result<i64> {
    let mut circuits = Circuits::new(boxes.len());
    for (i, j) in closest_pairs(boxes) {
        if circuits.join(i, j) && circuits.count == 1 {
            return Ok(boxes[i][0] * boxes[j][0]);
        }
    }
    Err(PuzzleError::NoSolution(format!("{} boxes never form one circuit", boxes.len())))
}

fn connections(boxes: usize) -> usize {
    if boxes == EXAMPLE_BOXES {EXAMPLE_CONNECTIONS} else {CONNECTIONS}
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let boxes = parse(input)?;
    match part {
        1 => {
            Ok(largest_circuits(&boxes, connections(boxes.len()))?.to_string())
        }
        2 => Ok(last_join(&boxes)?.to_string()),
        part => Err(PuzzleError::NoSuchPart(part)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn three_largest_circuits() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "40");
    }

    #[test]
    fn final_connection() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "25272");
    }

    #[test]
    fn closest_pair_comes_first() {
        let boxes = parse(EXAMPLE).unwrap();
        let (i, j) = closest_pairs(&boxes)[0];
        assert_eq!((boxes[i], boxes[j]), ([162, 817, 812], [425, 690, 689]));
    }

    #[test]
    fn union_find_tracks_sizes() {
        let mut circuits = Circuits::new(5);
        assert!(circuits.join(0, 1));
        assert!(circuits.join(3, 1));
        assert!(!circuits.join(0, 3));
        assert_eq!(circuits.count, 3);
        let mut sizes = circuits.sizes();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 1, 3]);
    }

    #[test]
    fn lone_box_has_no_last_join() {
        assert!(matches!(solve(2, "1,2,3\n"), Err(PuzzleError::NoSolution(_))));
    }

    #[test]
    fn rejects_two_coordinates() {
        assert!(matches!(solve(1, "1,2,3\n4,5\n"), Err(PuzzleError::Malformed(_))));
    }

    #[test]
    fn line_numbers_count_blank_lines() {
        let err = solve(1, "\n1,2,3\n\n4,5\n").unwrap_err();
        assert!(err.to_string().contains("line 4"), "{err}");
    }

    #[test]
    fn other_inputs_join_a_thousand_pairs() {
        assert_eq!(connections(20), 10);
        assert_eq!(connections(25), 1000);
        // 25 boxes have only 300 pairs: after a thousand joins one circuit is left.
        let input = (0 .. 25).map(|i| format!("{},{},{}\n", i * 37 % 101, i * i, 5 * i)).collect::<String>();
        let boxes = parse(&input).unwrap();
        assert!(largest_circuits(&boxes, 10).is_ok());
        let err = solve(1, &input).unwrap_err();
        assert!(matches!(err, PuzzleError::NoSolution(ref why) if why == "only 1 circuits remain"));
    }
}
