//! A dense 2D grid for puzzle maps.
//!
//! [`Grid`] owns a row-major `Vec<T>` covering `[0, width) × [0, height)`.
//! [`Tile`] is the cell type of plain wall/floor layouts.

use crate::geom::{Point, Range};

/// A wall/floor map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Whether the tile can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }
}

/// A 2D grid of `T` values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with every cell set to `fill`.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![fill; (width * height) as usize],
            width,
            height,
        }
    }

    /// Fill the grid using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> T) {
        for p in self.bounds().iter() {
            let idx = self.index(p);
            self.cells[idx] = f(p);
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from row-major cells. Returns `None` when the length
    /// does not match `width * height`.
    pub fn from_cells(width: i32, height: i32, cells: Vec<T>) -> Option<Self> {
        if width < 0 || height < 0 || cells.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            cells,
            width,
            height,
        })
    }

    /// Returns the bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Get a reference to the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        if !self.contains(p) {
            return None;
        }
        Some(&self.cells[self.index(p)])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, value: T) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = value;
    }

    /// Iterate over `(Point, &T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }

    /// Positions of every cell satisfying `f`, in row-major order.
    pub fn positions(&self, mut f: impl FnMut(&T) -> bool) -> Vec<Point> {
        self.iter().filter(|(_, c)| f(*c)).map(|(p, _)| p).collect()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count(&self, mut f: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| f(*c)).count()
    }
}

impl<T: Copy> Grid<T> {
    /// Get the cell at a point by value, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.get(p).copied()
    }
}

impl Grid<Tile> {
    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }
}
