//! Present packing: can each region's tree hold the listed presents?

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::{malformed, number};

/// Presents are at most this many cells across in either direction.
const MAX_SHAPE_SIDE: usize = 8;
/// Region rows are held as bit masks.
const MAX_REGION_WIDTH: usize = 64;

/// One rotation or reflection of a shape, as a bit mask per row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Orientation {
    rows: ArrayVec<u64, MAX_SHAPE_SIDE>,
    width: usize,
}

#[derive(Debug)]
struct Shape {
    cells: usize,
    orientations: ArrayVec<Orientation, 8>,
}

impl Shape {
    fn new(cells: &[(i64, i64)]) -> Result<Shape> {
        let mut orientations = ArrayVec::new();
        for turns in 0 .. 4 {
            for mirror in [false, true] {
                let moved = cells.iter().map(|&(r, c)| {
                    let (r, c) = if mirror {(r, -c)} else {(r, c)};
                    (0 .. turns).fold((r, c), |(r, c), _| (c, -r))
                }).collect::<Vec<_>>();
                let orientation = Shape::orient(&moved)?;
                if !orientations.contains(&orientation) {orientations.push(orientation)}
            }
        }
        Ok(Shape {cells: cells.len(), orientations})
    }

    fn orient(cells: &[(i64, i64)]) -> Result<Orientation> {
        let top = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let left = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let mut rows = ArrayVec::new();
        let mut width = 0;
        for &(r, c) in cells {
            let (r, c) = ((r - top) as usize, (c - left) as usize);
            let side = r.max(c) + 1;
            if side > MAX_SHAPE_SIDE {
                return Err(PuzzleError::TooLarge {what: "present side", size: side, max: MAX_SHAPE_SIDE});
            }
            while rows.len() <= r {rows.push(0)}
            rows[r] |= 1 << c;
            width = width.max(c + 1);
        }
        Ok(Orientation {rows, width})
    }

    fn side(&self) -> usize {
        self.orientations.first().map_or(0, |o| o.width.max(o.rows.len()))
    }
}

#[derive(Debug)]
struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

fn parse(input: &str) -> Result<(Vec<Shape>, Vec<Region>)> {
    let mut shapes = vec![];
    let mut regions = vec![];
    let mut lines = input.lines().map(str::trim).enumerate().peekable();
    while let Some((ix, line)) = lines.next() {
        if line.is_empty() {continue}
        let Some((head, tail)) = line.split_once(':') else {
            return Err(malformed(ix + 1, format!("{line:?} is neither a shape nor a region")));
        };
        if let Some((width, height)) = head.split_once('x') {
            let mut counts = tail.split_whitespace().map(number).collect::<Result<Vec<usize>>>()?;
            if counts.len() > shapes.len() {
                return Err(malformed(ix + 1, format!("{} counts for {} shapes", counts.len(), shapes.len())));
            }
            counts.resize(shapes.len(), 0);
            regions.push(Region {width: number(width)?, height: number(height)?, counts});
            continue;
        }
        if number::<usize>(head)? != shapes.len() || !tail.trim().is_empty() {
            return Err(malformed(ix + 1, format!("expected shape {}:", shapes.len())));
        }
        let mut cells = vec![];
        let mut r = 0;
        while let Some((ix, row)) = lines.next_if(|(_, row)| !row.is_empty() && !row.contains(':')) {
            for (c, cell) in row.bytes().enumerate() {
                match cell {
                    b'#' => cells.push((r, c as i64)),
                    b'.' => (),
                    _ => return Err(malformed(ix + 1, format!("unexpected cell {:?}", cell as char))),
                }
            }
            r += 1;
        }
        if cells.is_empty() {
            return Err(malformed(ix + 1, "shape has no cells"));
        }
        shapes.push(Shape::new(&cells)?);
    }
    Ok((shapes, regions))
}

/// Every orientation of every position of one shape, row by row, then
/// column by column, each as the row it starts on plus shifted masks.
fn placements(shape: &Shape, region: &Region) -> Vec<(usize, ArrayVec<u64, MAX_SHAPE_SIDE>)> {
    let mut all = vec![];
    for row in 0 .. region.height {
        for col in 0 .. region.width {
            for o in &shape.orientations {
                if row + o.rows.len() > region.height || col + o.width > region.width {continue}
                all.push((row, o.rows.iter().map(|&mask| mask << col).collect()));
            }
        }
    }
    all
}

struct Packing {
    pieces: Vec<usize>,
    placements: Vec<Vec<(usize, ArrayVec<u64, MAX_SHAPE_SIDE>)>>,
    grid: Vec<u64>,
    chosen: Vec<usize>,
}

impl Packing {
    fn fits(&self, (row, masks): &(usize, ArrayVec<u64, MAX_SHAPE_SIDE>)) -> bool {
        masks.iter().enumerate().all(|(i, &mask)| self.grid[row + i] & mask == 0)
    }

    fn toggle(&mut self, (row, masks): &(usize, ArrayVec<u64, MAX_SHAPE_SIDE>)) {
        for (i, &mask) in masks.iter().enumerate() {self.grid[row + i] ^= mask}
    }

    fn place(&mut self, k: usize) -> bool {
        let Some(&shape) = self.pieces.get(k) else {return true};
        // Copies of one shape are interchangeable: take their placements in increasing order.
        let first = match k.checked_sub(1) {
            Some(prev) if self.pieces[prev] == shape => self.chosen[prev] + 1,
            _ => 0,
        };
        for ix in first .. self.placements[shape].len() {
            let placement = self.placements[shape][ix].clone();
            if !self.fits(&placement) {continue}
            self.toggle(&placement);
            self.chosen.push(ix);
            if self.place(k + 1) {return true}
            self.chosen.pop();
            self.toggle(&placement);
        }
        false
    }
}

fn region_fits(shapes: &[Shape], region: &Region) -> Result<bool> {
    let mut pieces = region.counts.iter().enumerate()
        .flat_map(|(shape, &count)| std::iter::repeat(shape).take(count))
        .collect::<Vec<_>>();
    let needed = pieces.iter().map(|&shape| shapes[shape].cells).sum::<usize>();
    if needed > region.width * region.height {return Ok(false)}
    let side = pieces.iter().map(|&shape| shapes[shape].side()).max().unwrap_or(1);
    if (region.width / side) * (region.height / side) >= pieces.len() {return Ok(true)}
    if region.width > MAX_REGION_WIDTH {
        return Err(PuzzleError::TooLarge {what: "region width", size: region.width, max: MAX_REGION_WIDTH});
    }

    pieces.sort_by_key(|&shape| (shapes[shape].orientations.len(), shape));
    let mut packing = Packing {
        placements: shapes.iter().map(|shape| placements(shape, region)).collect(),
        grid: vec![0; region.height],
        chosen: Vec::with_capacity(pieces.len()),
        pieces,
    };
    Ok(packing.place(0))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part != 1 {return Err(PuzzleError::NoSuchPart(part))}
    let (shapes, regions) = parse(input)?;
    let mut fitting = 0;
    for region in &regions {
        let fits = region_fits(&shapes, region)?;
        debug!(width = region.width, height = region.height, fits, "region");
        if fits {fitting += 1}
    }
    Ok(fitting.to_string())
}
