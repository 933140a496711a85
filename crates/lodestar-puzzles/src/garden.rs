//! Fencing the regions of a garden of plots.

use log::debug;

use lodestar_core::{Dir, Grid, Point};
use lodestar_paths::{Components, Neighbors, Pather, components};

use crate::error::PuzzleError;

/// Measurements of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub plant: char,
    pub area: usize,
    /// Number of unit fence segments around the region.
    pub perimeter: usize,
    /// Number of straight fence sides, counted as corners.
    pub sides: usize,
}

#[derive(Debug, Clone)]
pub struct Garden {
    plots: Grid<char>,
}

impl Garden {
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        Ok(Self {
            plots: Grid::parse(s)?,
        })
    }

    fn same_plant(&self, a: Point, b: Point) -> bool {
        self.plots.contains(b) && self.plots.get(a) == self.plots.get(b)
    }

    /// Regions in row-major order of their first plot.
    pub fn components(&self) -> Components<Point> {
        components(self, self.plots.bounds())
    }

    /// Area, perimeter and side count of every region.
    pub fn regions(&self) -> Vec<Region> {
        let cc = self.components();
        let mut nb = Neighbors::new();
        let mut out = Vec::with_capacity(cc.len());
        for members in cc.iter() {
            let first = members[0];
            let mut perimeter = 0;
            let mut sides = 0;
            for &p in members {
                perimeter += 4 - nb.cardinal(p, |n| self.same_plant(p, n)).len();
                sides += self.corners(p);
            }
            out.push(Region {
                plant: self.plots.at(first).unwrap_or_default(),
                area: members.len(),
                perimeter,
                sides,
            });
        }
        debug!("garden: {} regions", out.len());
        out
    }

    /// Corners of the region touching plot `p`. A region has as many sides
    /// as corners.
    fn corners(&self, p: Point) -> usize {
        Dir::ALL
            .into_iter()
            .filter(|&d| {
                let e = d.turn_right();
                let a = self.same_plant(p, p.step(d));
                let b = self.same_plant(p, p.step(e));
                let diag = self.same_plant(p, p.step(d).step(e));
                // convex, or concave with the diagonal outside
                (!a && !b) || (a && b && !diag)
            })
            .count()
    }

    /// Σ area × perimeter.
    pub fn fence_price(&self) -> usize {
        self.regions().iter().map(|r| r.area * r.perimeter).sum()
    }

    /// Σ area × sides.
    pub fn bulk_price(&self) -> usize {
        self.regions().iter().map(|r| r.area * r.sides).sum()
    }
}

/// Adjacent plots growing the same plant.
impl Pather for Garden {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.same_plant(p, n)),
        );
    }
}
