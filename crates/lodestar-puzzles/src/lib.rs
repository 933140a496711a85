//! Grid and graph puzzles solved with the `lodestar-paths` search core.
//!
//! Each module parses one puzzle from its ASCII description and answers its
//! questions:
//!
//! | Module | Search |
//! |---|---|
//! | [`maze`] | co-optimal Dijkstra over `(cell, facing)` states |
//! | [`patrol`] | cycle detection of a turning walk |
//! | [`memory`] | repeated shortest path, binary search on failure |
//! | [`racetrack`] | BFS distance map and a Manhattan scan |
//! | [`keypad`] | memoized recursion over nested keypads |
//! | [`program`] | digit-by-digit search over a three-bit computer |
//! | [`stones`] | budgeted memoized counting |
//! | [`towels`] | memoized string decomposition |
//! | [`trails`] | BFS reachability and memoized path counting |
//! | [`garden`] | connected components |
//!
//! Tuning knobs live in small `Default` structs ([`MazeCosts`],
//! [`CheatRules`], [`MemorySpace`]); with the `serde` feature they can be
//! (de)serialized.

mod error;

pub mod garden;
pub mod keypad;
pub mod maze;
pub mod memory;
pub mod patrol;
pub mod program;
pub mod racetrack;
pub mod stones;
pub mod towels;
pub mod trails;

pub use error::PuzzleError;
pub use garden::{Garden, Region};
pub use keypad::{Keypad, KeypadChain};
pub use maze::{Maze, MazeCosts};
pub use memory::{FallingBytes, MemorySpace};
pub use patrol::{Patrol, TurningWalker};
pub use program::{Computer, Op, Run};
pub use racetrack::{CheatRules, Racetrack};
pub use stones::{Stones, count_after};
pub use towels::Towels;
pub use trails::TopoMap;
