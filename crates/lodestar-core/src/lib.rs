//! Geometry and grid primitives for puzzle search.
//!
//! This crate provides the value types shared across the *lodestar*
//! workspace: integer points and rectangles, the four cardinal directions,
//! a dense 2D [`Grid`], and parsing of ASCII layouts into grids.

pub mod geom;
pub mod grid;
pub mod parse;

pub use geom::{Dir, Heading, Point, Range};
pub use grid::{Grid, Tile};
pub use parse::{ParseError, parse_coords, parse_numbers};
