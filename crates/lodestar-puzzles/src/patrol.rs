//! Patrol route of a guard who walks straight and turns right at obstacles.

use std::collections::HashSet;

use log::debug;

use lodestar_core::{Dir, Grid, Heading, Point, Tile};
use lodestar_paths::{Step, Trace, Walker, walk};

use crate::error::PuzzleError;

/// Grid walker that moves straight ahead and rotates clockwise
/// (up → right → down → left) while the cell ahead is a wall.
///
/// Stepping off the grid ends the walk. An optional extra obstacle can be
/// layered over the grid without modifying it.
#[derive(Clone, Copy)]
pub struct TurningWalker<'a> {
    grid: &'a Grid<Tile>,
    extra: Option<Point>,
}

impl<'a> TurningWalker<'a> {
    pub fn new(grid: &'a Grid<Tile>) -> Self {
        Self { grid, extra: None }
    }

    /// The same walker with one additional wall at `p`.
    pub fn with_obstacle(self, p: Point) -> Self {
        Self {
            extra: Some(p),
            ..self
        }
    }

    #[inline]
    fn blocked(&self, p: Point) -> bool {
        !self.grid.is_open(p) || self.extra == Some(p)
    }
}

impl Walker for TurningWalker<'_> {
    type State = Heading;

    fn step(&self, mut h: Heading) -> Step<Heading> {
        for _ in 0..4 {
            let ahead = h.ahead();
            if !self.grid.contains(ahead) {
                return Step::Exit;
            }
            if !self.blocked(ahead) {
                return Step::Move(Heading::new(ahead, h.dir));
            }
            h.dir = h.dir.turn_right();
        }
        Step::Blocked
    }
}

#[derive(Debug, Clone)]
pub struct Patrol {
    tiles: Grid<Tile>,
    start: Heading,
}

impl Patrol {
    /// Parse a map of `#` obstacles and `.` floor with exactly one guard
    /// drawn as `^`, `>`, `v` or `<`.
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        let chars = Grid::parse(s)?;
        let mut start: Option<Heading> = None;
        for (p, &c) in chars.iter() {
            if let Some(dir) = Dir::from_arrow(c) {
                if let Some(first) = start {
                    return Err(PuzzleError::Invalid(format!(
                        "more than one guard: {} and {p}",
                        first.pos
                    )));
                }
                start = Some(Heading::new(p, dir));
            }
        }
        let start = start.ok_or_else(|| PuzzleError::Invalid("no guard on the map".into()))?;
        let tiles = chars.try_map(|c| match c {
            '#' => Some(Tile::Wall),
            '.' | '^' | '>' | 'v' | '<' => Some(Tile::Open),
            _ => None,
        })?;
        Ok(Self { tiles, start })
    }

    pub fn start(&self) -> Heading {
        self.start
    }

    /// The guard's walk on the unmodified map.
    pub fn route(&self) -> Result<Trace<Heading>, PuzzleError> {
        Ok(walk(&TurningWalker::new(&self.tiles), self.start)?)
    }

    /// Distinct cells the guard visits before leaving the map.
    pub fn visited(&self) -> Result<HashSet<Point>, PuzzleError> {
        Ok(self.route()?.distinct(|h| h.pos))
    }

    /// Whether one extra obstacle at `p` traps the guard in a loop.
    ///
    /// The guard's own cell and cells that are already walls never count.
    pub fn loops_with_obstacle(&self, p: Point) -> Result<bool, PuzzleError> {
        if p == self.start.pos || !self.tiles.is_open(p) {
            return Ok(false);
        }
        let walker = TurningWalker::new(&self.tiles).with_obstacle(p);
        Ok(walk(&walker, self.start)?.is_cycle())
    }

    /// Every cell where one extra obstacle makes the guard loop forever,
    /// sorted.
    ///
    /// Only cells on the unobstructed route can change the walk, so only those
    /// are tried.
    pub fn loop_placements(&self) -> Result<Vec<Point>, PuzzleError> {
        let mut candidates: Vec<Point> = self.visited()?.into_iter().collect();
        candidates.sort();
        let mut found = Vec::new();
        for p in candidates {
            if self.loops_with_obstacle(p)? {
                found.push(p);
            }
        }
        debug!("patrol: {} loop placements", found.len());
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestar_paths::{Outcome, SearchError};

    fn walls(w: i32, h: i32, at: &[(i32, i32)]) -> Grid<Tile> {
        let mut g = Grid::new(w, h, Tile::Open);
        for &(x, y) in at {
            g.set(Point::new(x, y), Tile::Wall);
        }
        g
    }

    const EXAMPLE: &str = "
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn open_grid_never_cycles() {
        let grid = Grid::new(6, 5, Tile::Open);
        let walker = TurningWalker::new(&grid);
        for p in grid.bounds() {
            for d in Dir::ALL {
                let trace = walk(&walker, Heading::new(p, d)).unwrap();
                assert_eq!(trace.outcome(), Outcome::Exit);
                assert_eq!(trace.states().len(), trace.moves() + 1);
            }
        }
    }

    #[test]
    fn closed_square_loops() {
        // .#..
        // ...#
        // #...
        // ..#.
        let grid = walls(4, 4, &[(1, 0), (3, 1), (0, 2), (2, 3)]);
        let walker = TurningWalker::new(&grid);
        let trace = walk(&walker, Heading::new(Point::new(1, 2), Dir::Up)).unwrap();
        assert!(trace.is_cycle());
        assert_eq!(trace.moves(), 5);
        assert_eq!(trace.states().len(), 5);
        assert_eq!(trace.distinct(|h| h.pos).len(), 4);
    }

    #[test]
    fn extra_obstacle_redirects() {
        let grid = Grid::new(3, 3, Tile::Open);
        let start = Heading::new(Point::new(1, 2), Dir::Up);
        let plain = walk(&TurningWalker::new(&grid), start).unwrap();
        assert_eq!(plain.moves(), 2);

        let blocked = TurningWalker::new(&grid).with_obstacle(Point::new(1, 1));
        let trace = walk(&blocked, start).unwrap();
        assert_eq!(trace.states()[1], Heading::new(Point::new(2, 2), Dir::Right));
        assert_eq!(trace.outcome(), Outcome::Exit);
    }

    #[test]
    fn walled_in_walker_is_blocked() {
        let grid = walls(3, 3, &[(1, 0), (2, 1), (1, 2), (0, 1)]);
        let walker = TurningWalker::new(&grid);
        let err = walk(&walker, Heading::new(Point::new(1, 1), Dir::Up)).unwrap_err();
        assert_eq!(err, SearchError::Boxed { moves: 0 });
    }

    #[test]
    fn route_leaves_the_map() {
        let patrol = Patrol::parse(EXAMPLE).unwrap();
        assert_eq!(patrol.start(), Heading::new(Point::new(4, 6), Dir::Up));
        let route = patrol.route().unwrap();
        assert_eq!(route.outcome(), Outcome::Exit);
        assert_eq!(patrol.visited().unwrap().len(), 41);
    }

    #[test]
    fn loop_placements_example() {
        let patrol = Patrol::parse(EXAMPLE).unwrap();
        let found = patrol.loop_placements().unwrap();
        assert_eq!(found.len(), 6);
        assert!(found.contains(&Point::new(3, 6)));
        assert!(!found.contains(&patrol.start().pos));
    }

    #[test]
    fn start_and_walls_are_rejected() {
        let patrol = Patrol::parse(EXAMPLE).unwrap();
        assert!(!patrol.loops_with_obstacle(Point::new(4, 6)).unwrap());
        assert!(!patrol.loops_with_obstacle(Point::new(4, 0)).unwrap());
        assert!(!patrol.loops_with_obstacle(Point::new(-1, 0)).unwrap());
    }

    #[test]
    fn obstacle_free_map_never_loops() {
        let patrol = Patrol::parse("...\n.>.\n...").unwrap();
        let route = patrol.route().unwrap();
        assert!(!route.is_cycle());
        assert_eq!(route.moves(), 1);
        assert!(patrol.loop_placements().unwrap().is_empty());
    }

    #[test]
    fn boxed_guard_is_an_error() {
        let patrol = Patrol::parse(".#.\n#^#\n.#.").unwrap();
        assert_eq!(
            patrol.route().unwrap_err(),
            PuzzleError::Search(SearchError::Boxed { moves: 0 })
        );
    }

    #[test]
    fn guard_count_is_checked() {
        assert!(matches!(Patrol::parse("..\n.."), Err(PuzzleError::Invalid(_))));
        assert!(matches!(Patrol::parse("^.\n.<"), Err(PuzzleError::Invalid(_))));
    }
}
