//! Single-track race course where a program may cheat through walls once.

use std::collections::BTreeMap;

use log::debug;

use lodestar_core::{Grid, Point, Tile};
use lodestar_paths::{Cost, DistanceTable, SearchError, TilePather, bfs_map, manhattan, manhattan_ball};

use crate::error::PuzzleError;

/// Which cheats count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheatRules {
    /// Longest cheat, in steps with collision disabled.
    pub max_len: i32,
    /// Smallest saving worth reporting.
    pub min_savings: Cost,
}

impl Default for CheatRules {
    fn default() -> Self {
        Self {
            max_len: 2,
            min_savings: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Racetrack {
    tiles: Grid<Tile>,
    start: Point,
    end: Point,
    /// Steps from the start to every track cell.
    dist: DistanceTable<Point>,
}

impl Racetrack {
    /// Parse a course of `#` walls and `.` track with one `S` and `E`.
    ///
    /// Every track cell must lie on the single route from `S` to `E`.
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        let chars = Grid::parse(s)?;
        let start = chars.find_unique('S')?;
        let end = chars.find_unique('E')?;
        let tiles = chars.try_map(|c| match c {
            '#' => Some(Tile::Wall),
            '.' | 'S' | 'E' => Some(Tile::Open),
            _ => None,
        })?;

        let dist = bfs_map(&TilePather::new(&tiles), &[start], Cost::MAX);
        let length = dist.get(&end).ok_or(SearchError::NoPath)?;
        let track = tiles.count(|t| t.is_open());
        if track as Cost != length + 1 {
            return Err(PuzzleError::Invalid(format!(
                "{track} track cells for a route of {length} steps"
            )));
        }
        Ok(Self {
            tiles,
            start,
            end,
            dist,
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Picoseconds needed without cheating.
    pub fn track_len(&self) -> Cost {
        self.dist.get(&self.end).unwrap_or_default()
    }

    /// Steps from the start to `p`, if `p` is on the track.
    pub fn distance(&self, p: Point) -> Option<Cost> {
        self.dist.get(&p)
    }

    /// Call `f` with the saving of every cheat of at most `max_len` steps
    /// that saves time.
    ///
    /// A cheat from track cell `a` to a later track cell `b` covering `d`
    /// steps saves `dist(b) - dist(a) - d`.
    fn for_each_saving(&self, max_len: i32, mut f: impl FnMut(Cost)) {
        let ball = manhattan_ball(max_len);
        for (a, da) in self.dist.iter() {
            for &offset in &ball {
                let b = a + offset;
                let Some(db) = self.dist.get(&b) else {
                    continue;
                };
                let d = manhattan(a, b) as Cost;
                if db > da + d {
                    f(db - da - d);
                }
            }
        }
    }

    /// Number of cheats allowed by `rules` that save at least
    /// `rules.min_savings`.
    pub fn count_cheats(&self, rules: CheatRules) -> usize {
        let mut n = 0;
        self.for_each_saving(rules.max_len, |saved| {
            if saved >= rules.min_savings {
                n += 1;
            }
        });
        debug!(
            "racetrack: {n} cheats of length <= {} save >= {}",
            rules.max_len, rules.min_savings
        );
        n
    }

    /// Number of cheats of at most `max_len` steps per positive saving.
    pub fn savings(&self, max_len: i32) -> BTreeMap<Cost, usize> {
        let mut hist = BTreeMap::new();
        self.for_each_saving(max_len, |saved| *hist.entry(saved).or_default() += 1);
        hist
    }

    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }
}
