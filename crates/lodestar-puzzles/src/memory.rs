//! A square memory space that gets corrupted one byte at a time.

use log::debug;

use lodestar_core::{Grid, Point, Range, Tile, parse_coords};
use lodestar_paths::{Cost, SearchError, TilePather, shortest_cost};

use crate::error::PuzzleError;

/// Shape of the memory space and the route to cross it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySpace {
    /// Side length of the square space.
    pub size: i32,
    pub start: Point,
    pub goal: Point,
}

impl MemorySpace {
    /// A `size × size` space crossed from the top-left to the bottom-right
    /// corner.
    pub const fn square(size: i32) -> Self {
        Self {
            size,
            start: Point::new(0, 0),
            goal: Point::new(size - 1, size - 1),
        }
    }
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self::square(71)
    }
}

#[derive(Debug, Clone)]
pub struct FallingBytes {
    space: MemorySpace,
    bytes: Vec<Point>,
}

impl FallingBytes {
    /// Parse one `x,y` byte position per line.
    pub fn parse(s: &str, space: MemorySpace) -> Result<Self, PuzzleError> {
        let bytes = parse_coords(s)?;
        let bounds = Range::sized(space.size, space.size);
        if let Some(p) = bytes.iter().find(|&&p| !bounds.contains(p)) {
            return Err(PuzzleError::Invalid(format!("byte {p} outside {bounds}")));
        }
        for p in [space.start, space.goal] {
            if !bounds.contains(p) {
                return Err(PuzzleError::Invalid(format!("endpoint {p} outside {bounds}")));
            }
        }
        Ok(Self { space, bytes })
    }

    pub fn space(&self) -> MemorySpace {
        self.space
    }

    pub fn bytes(&self) -> &[Point] {
        &self.bytes
    }

    /// The space after the first `fallen` bytes have landed.
    pub fn grid_after(&self, fallen: usize) -> Grid<Tile> {
        let mut grid = Grid::new(self.space.size, self.space.size, Tile::Open);
        for &p in self.bytes.iter().take(fallen) {
            grid.set(p, Tile::Wall);
        }
        grid
    }

    /// Fewest steps from start to goal after `fallen` bytes.
    ///
    /// Fails with [`SearchError::NoPath`] when the goal is cut off.
    pub fn min_steps(&self, fallen: usize) -> Result<Cost, PuzzleError> {
        let grid = self.grid_after(fallen);
        if !grid.is_open(self.space.start) {
            return Err(SearchError::NoPath.into());
        }
        let goal = self.space.goal;
        Ok(shortest_cost(&TilePather::new(&grid), self.space.start, |p| p == goal)?)
    }

    fn is_passable(&self, fallen: usize) -> Result<bool, PuzzleError> {
        match self.min_steps(fallen) {
            Ok(_) => Ok(true),
            Err(PuzzleError::Search(SearchError::NoPath)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// The first byte whose landing cuts the goal off from the start.
    ///
    /// Passability only ever gets lost as bytes fall, so the answer is found
    /// by binary search over the number of fallen bytes.
    pub fn first_blocker(&self) -> Result<Point, PuzzleError> {
        if !self.is_passable(0)? {
            return Err(PuzzleError::Invalid("goal unreachable before any byte falls".into()));
        }
        if self.is_passable(self.bytes.len())? {
            return Err(PuzzleError::Invalid("goal stays reachable after every byte".into()));
        }
        // passable(lo) and !passable(hi)
        let (mut lo, mut hi) = (0, self.bytes.len());
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.is_passable(mid)? {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let blocker = self.bytes[hi - 1];
        debug!("memory: byte #{hi} at {blocker} blocks the exit");
        Ok(blocker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    fn example() -> FallingBytes {
        FallingBytes::parse(EXAMPLE, MemorySpace::square(7)).unwrap()
    }

    #[test]
    fn steps_after_twelve_bytes() {
        let bytes = example();
        assert_eq!(bytes.bytes().len(), 25);
        assert_eq!(bytes.min_steps(0).unwrap(), 12);
        assert_eq!(bytes.min_steps(12).unwrap(), 22);
    }

    #[test]
    fn first_blocker_example() {
        let bytes = example();
        assert_eq!(bytes.first_blocker().unwrap(), Point::new(6, 1));
        assert_eq!(
            bytes.min_steps(21).unwrap_err(),
            PuzzleError::Search(SearchError::NoPath)
        );
        assert!(bytes.min_steps(20).is_ok());
    }

    #[test]
    fn never_blocked_is_invalid() {
        let bytes = FallingBytes::parse("1,1", MemorySpace::square(3)).unwrap();
        assert_eq!(bytes.min_steps(1).unwrap(), 4);
        assert!(matches!(bytes.first_blocker(), Err(PuzzleError::Invalid(_))));
    }

    #[test]
    fn covered_start_blocks_immediately() {
        let bytes = FallingBytes::parse("0,0", MemorySpace::square(3)).unwrap();
        assert_eq!(bytes.first_blocker().unwrap(), Point::new(0, 0));
    }

    #[test]
    fn out_of_range_bytes_are_rejected() {
        let err = FallingBytes::parse("7,0", MemorySpace::square(7)).unwrap_err();
        assert!(matches!(err, PuzzleError::Invalid(_)));
        let err = FallingBytes::parse("1;2", MemorySpace::square(7)).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse(_)));
    }

    #[test]
    fn default_space() {
        let space = MemorySpace::default();
        assert_eq!(space.goal, Point::new(70, 70));
    }
}
