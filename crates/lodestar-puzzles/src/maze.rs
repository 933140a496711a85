//! Turning maze: a reindeer walks from `S` to `E`, paying extra for every
//! quarter turn.

use log::debug;

use lodestar_core::{Dir, Grid, Heading, Point, Tile};
use lodestar_paths::{Cost, Pather, ShortestPaths, WeightedPather, shortest_cost, shortest_paths};

use crate::error::PuzzleError;

/// Movement costs of the turning maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeCosts {
    /// Cost of one step forward.
    pub step: Cost,
    /// Extra cost of a quarter turn taken before a step.
    pub turn: Cost,
}

impl Default for MazeCosts {
    fn default() -> Self {
        Self { step: 1, turn: 1000 }
    }
}

#[derive(Debug, Clone)]
pub struct Maze {
    tiles: Grid<Tile>,
    start: Point,
    end: Point,
    costs: MazeCosts,
}

impl Maze {
    /// Parse a maze of `#` walls, `.` floor and one `S` and `E` each.
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        let chars = Grid::parse(s)?;
        let start = chars.find_unique('S')?;
        let end = chars.find_unique('E')?;
        let tiles = chars.try_map(|c| match c {
            '#' => Some(Tile::Wall),
            '.' | 'S' | 'E' => Some(Tile::Open),
            _ => None,
        })?;
        Ok(Self {
            tiles,
            start,
            end,
            costs: MazeCosts::default(),
        })
    }

    pub fn with_costs(self, costs: MazeCosts) -> Self {
        Self { costs, ..self }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn costs(&self) -> MazeCosts {
        self.costs
    }

    /// The walk always begins facing east.
    fn origin(&self) -> Heading {
        Heading::new(self.start, Dir::Right)
    }

    /// Lowest possible score from start to end.
    pub fn best_score(&self) -> Result<Cost, PuzzleError> {
        let end = self.end;
        Ok(shortest_cost(self, self.origin(), |h| h.pos == end)?)
    }

    /// Every optimal route, as a predecessor graph over headings.
    pub fn best_paths(&self) -> Result<ShortestPaths<Heading>, PuzzleError> {
        let end = self.end;
        Ok(shortest_paths(self, self.origin(), |h| h.pos == end)?)
    }

    /// Number of cells lying on at least one optimal route.
    pub fn best_seats(&self) -> Result<usize, PuzzleError> {
        let paths = self.best_paths()?;
        let seats = paths.project(|h| h.pos).len();
        debug!("maze: score {} with {seats} seats", paths.cost());
        Ok(seats)
    }
}

impl Pather for Maze {
    type Node = Heading;

    /// Forward, or a quarter turn and a step. Turning around never lies on
    /// a shortest route.
    fn neighbors(&self, h: Heading, buf: &mut Vec<Heading>) {
        for dir in Dir::ALL.into_iter().filter(|&d| d != h.dir.reverse()) {
            let next = h.pos.step(dir);
            if self.tiles.is_open(next) {
                buf.push(Heading::new(next, dir));
            }
        }
    }
}

impl WeightedPather for Maze {
    fn cost(&self, from: Heading, to: Heading) -> Cost {
        if from.dir == to.dir {
            self.costs.step
        } else {
            self.costs.step + self.costs.turn
        }
    }
}
