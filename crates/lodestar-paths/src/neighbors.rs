use lodestar_core::{Dir, Grid, Point, Tile};

use crate::traits::{Cost, Pather, WeightedPather};

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbors of a grid point, filtered by a
/// predicate, in the fixed order up, right, down, left.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in Dir::ALL {
            let n = p.step(d);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// Unit-cost 4-way movement over the open tiles of a wall/floor grid.
#[derive(Clone, Copy)]
pub struct TilePather<'a> {
    grid: &'a Grid<Tile>,
}

impl<'a> TilePather<'a> {
    pub fn new(grid: &'a Grid<Tile>) -> Self {
        Self { grid }
    }
}

impl Pather for TilePather<'_> {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.grid.is_open(n)));
    }
}

impl WeightedPather for TilePather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> Cost {
        1
    }
}
