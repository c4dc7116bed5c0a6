use itertools::Itertools;

use crate::error::{PuzzleError, Result};
use crate::input::{malformed, number};

type Tile = (i64, i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    min: Tile,
    max: Tile,
}

impl Rect {
    fn spanning(a: Tile, b: Tile) -> Rect {
        Rect {min: (a.0.min(b.0), a.1.min(b.1)), max: (a.0.max(b.0), a.1.max(b.1))}
    }

    /// Tiles covered, corners included.
    fn area(&self) -> i64 {
        (self.max.0 - self.min.0 + 1) * (self.max.1 - self.min.1 + 1)
    }
}

struct Polygon {
    corners: Vec<Tile>,
}

impl Polygon {
    fn parse(input: &str) -> Result<Polygon> {
        let numbered = input.lines().enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(ix, line)| {
                let Some((x, y)) = line.split_once(',') else {
                    return Err(malformed(ix + 1, format!("{line:?} is not x,y")));
                };
                Ok((ix + 1, (number(x)?, number(y)?)))
            })
            .collect::<Result<Vec<(usize, Tile)>>>()?;
        let polygon = Polygon {corners: numbered.iter().map(|&(_, tile)| tile).collect()};
        if let Some((k, _)) = polygon.edges().find_position(|(a, b)| a.0 != b.0 && a.1 != b.1) {
            return Err(malformed(numbered[k].0, "edge to the next corner is not horizontal or vertical"));
        }
        Ok(polygon)
    }

    /// Consecutive corner pairs, closing back to the first.
    fn edges(&self) -> impl Iterator<Item = (Tile, Tile)> + '_ {
        self.corners.iter().copied().circular_tuple_windows()
    }

    /// Rectangles with two corners as opposite vertices, largest first.
    /// Pairs sharing a row or column span no interior and are left out.
    fn rects(&self) -> Vec<Rect> {
        self.corners.iter().tuple_combinations()
            .filter(|(a, b)| a.0 != b.0 && a.1 != b.1)
            .map(|(&a, &b)| Rect::spanning(a, b))
            .sorted_unstable_by_key(|rect| std::cmp::Reverse(rect.area()))
            .collect()
    }

    /// No edge crosses the open interior of `rect`, and its centre lies
    /// inside the polygon. Together these mean `rect` is fully enclosed.
    fn encloses(&self, rect: &Rect) -> bool {
        let crosses = self.edges().any(|(a, b)| {
            let Rect {min, max} = *rect;
            if a.0 == b.0 {
                let (lo, hi) = (a.1.min(b.1), a.1.max(b.1));
                min.0 < a.0 && a.0 < max.0 && lo.max(min.1) < hi.min(max.1)
            } else {
                let (lo, hi) = (a.0.min(b.0), a.0.max(b.0));
                min.1 < a.1 && a.1 < max.1 && lo.max(min.0) < hi.min(max.0)
            }
        });
        !crosses && self.contains_doubled((rect.min.0 + rect.max.0, rect.min.1 + rect.max.1))
    }

    /// Even-odd test on a point given in doubled coordinates, casting a ray
    /// towards +x. The point must not lie on the boundary.
    fn contains_doubled(&self, (cx, cy): Tile) -> bool {
        self.edges()
            .filter(|(a, b)| a.0 == b.0 && 2 * a.0 > cx && (2 * a.1 > cy) != (2 * b.1 > cy))
            .count() % 2 == 1
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let polygon = Polygon::parse(input)?;
    let rects = polygon.rects();
    let best = match part {
        1 => rects.first(),
        2 => rects.iter().find(|rect| polygon.encloses(rect)),
        part => return Err(PuzzleError::NoSuchPart(part)),
    };
    best.map(|rect| rect.area().to_string())
        .ok_or_else(|| PuzzleError::NoSolution("rectangle between red tiles".into()))
}
