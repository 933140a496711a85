//! Hiking trails on a topographic map.
//!
//! A trail starts at height 0, ends at height 9 and climbs by exactly one
//! with every orthogonal step.

use log::debug;

use lodestar_core::{Grid, Point};
use lodestar_paths::{Cost, MemoTable, Pather, bfs_map};

use crate::error::PuzzleError;

const PEAK: u8 = 9;

#[derive(Debug, Clone)]
pub struct TopoMap {
    heights: Grid<u8>,
}

impl TopoMap {
    /// Parse one digit per cell.
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        let heights = Grid::parse(s)?.try_map(|c| c.to_digit(10).map(|d| d as u8))?;
        Ok(Self { heights })
    }

    pub fn height(&self, p: Point) -> Option<u8> {
        self.heights.at(p)
    }

    /// Cells of height 0, in row-major order.
    pub fn trailheads(&self) -> Vec<Point> {
        self.heights.positions(|&h| h == 0)
    }

    /// Number of distinct peaks reachable from `head`.
    pub fn score(&self, head: Point) -> usize {
        let reach = bfs_map(self, &[head], PEAK as Cost);
        reach
            .iter()
            .filter(|&(p, _)| self.height(p) == Some(PEAK))
            .count()
    }

    /// Sum of trailhead scores.
    pub fn scores(&self) -> usize {
        self.trailheads().into_iter().map(|h| self.score(h)).sum()
    }

    fn trails_from(&self, p: Point, memo: &mut MemoTable<Point, u64>) -> u64 {
        if self.height(p) == Some(PEAK) {
            return 1;
        }
        if let Some(n) = memo.get(&p) {
            return n;
        }
        let mut next = Vec::with_capacity(4);
        self.neighbors(p, &mut next);
        let total = next.into_iter().map(|n| self.trails_from(n, memo)).sum();
        memo.insert(p, total)
    }

    /// Number of distinct trails starting at `head`.
    pub fn rating(&self, head: Point) -> u64 {
        self.trails_from(head, &mut MemoTable::new())
    }

    /// Sum of trailhead ratings, sharing one memo table across heads.
    pub fn ratings(&self) -> u64 {
        let mut memo = MemoTable::new();
        let total = self
            .trailheads()
            .into_iter()
            .map(|h| self.trails_from(h, &mut memo))
            .sum();
        debug!("trails: {} memoized cells, {} hits", memo.len(), memo.hits());
        total
    }
}

/// Uphill steps of exactly one.
impl Pather for TopoMap {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(h) = self.height(p) else {
            return;
        };
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.height(n) == Some(h + 1)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn example_scores() {
        let map = TopoMap::parse(EXAMPLE).unwrap();
        assert_eq!(map.trailheads().len(), 9);
        assert_eq!(map.score(Point::new(2, 0)), 5);
        assert_eq!(map.scores(), 36);
    }

    #[test]
    fn example_ratings() {
        let map = TopoMap::parse(EXAMPLE).unwrap();
        assert_eq!(map.rating(Point::new(2, 0)), 20);
        assert_eq!(map.ratings(), 81);
    }

    #[test]
    fn single_ridge() {
        let map = TopoMap::parse("0123456789").unwrap();
        assert_eq!(map.scores(), 1);
        assert_eq!(map.ratings(), 1);
    }

    #[test]
    fn forked_trail() {
        // Two ways from the 0 to the same 9.
        let map = TopoMap::parse(
            "
0123
1234
2345
3456
4567
5678
6789
",
        )
        .unwrap();
        assert_eq!(map.score(Point::new(0, 0)), 1);
        assert!(map.rating(Point::new(0, 0)) > 1);
    }

    #[test]
    fn non_digits_are_rejected() {
        assert!(matches!(TopoMap::parse("01\n.2"), Err(PuzzleError::Parse(_))));
    }
}
