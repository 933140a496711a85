//! Search algorithms over implicit graphs.
//!
//! This crate provides the search routines shared by the grid and graph
//! puzzles of the workspace:
//!
//! - **Dijkstra** earliest-exit cost ([`shortest_cost`]) and every
//!   co-optimal path ([`shortest_paths`])
//! - **BFS** unweighted distance maps ([`bfs_map`])
//! - **Connected components** labelling ([`components`])
//! - **Cycle detection** for deterministic walks ([`walk`])
//! - **Memoized counting** over recursive state spaces ([`BudgetCounter`],
//!   [`count_splits`])
//!
//! Every call builds its own tables and drops them on return; nothing is
//! shared between invocations.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, connected components |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`Walker`] | cycle detection |

mod bfs;
mod cc;
mod cycle;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod memo;
mod neighbors;
mod table;
mod traits;

pub use bfs::bfs_map;
pub use cc::{Components, components};
pub use cycle::{Outcome, Step, Trace, Walker, walk};
pub use dijkstra::{ShortestPaths, shortest_cost, shortest_paths};
pub use distance::{manhattan, manhattan_ball};
pub use error::SearchError;
pub use frontier::Frontier;
pub use memo::{BudgetCounter, MemoTable, count_splits};
pub use neighbors::{Neighbors, TilePather};
pub use table::{DistanceTable, Relax};
pub use traits::{Cost, Pather, WeightedPather};
