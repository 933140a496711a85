//! Parsing of ASCII puzzle layouts and number lists.
//!
//! A layout is a block of text where each character maps to one grid cell.
//! [`Grid::parse`] turns it into a `Grid<char>`; [`Grid::try_map`] then
//! converts characters into typed cells, rejecting unknown ones, and
//! [`Grid::find_unique`] locates marker characters such as `S` or `^`.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;
use crate::grid::Grid;

impl Grid<char> {
    /// Parse a text block into a character grid.
    ///
    /// Leading/trailing blank lines are dropped and each line is trimmed,
    /// so layouts may be indented inside string literals. Every remaining
    /// line must have the same width.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;

        for line in s.trim().lines() {
            let line = line.trim();
            let n = line.chars().count();
            match width {
                None => width = Some(n),
                Some(w) if w != n => return Err(ParseError::InconsistentSize(s.trim().to_string())),
                Some(_) => {}
            }
            cells.extend(line.chars());
            height += 1;
        }

        let width = width.unwrap_or(0) as i32;
        Grid::from_cells(width, height, cells)
            .ok_or_else(|| ParseError::InconsistentSize(s.trim().to_string()))
    }

    /// Convert every character with `f`. A character for which `f` returns
    /// `None` yields [`ParseError::InvalidRune`].
    pub fn try_map<T>(&self, mut f: impl FnMut(char) -> Option<T>) -> Result<Grid<T>, ParseError> {
        let mut cells = Vec::with_capacity(self.bounds().len());
        for (pos, &ch) in self.iter() {
            let cell = f(ch).ok_or(ParseError::InvalidRune { ch, pos })?;
            cells.push(cell);
        }
        Grid::from_cells(self.width(), self.height(), cells)
            .ok_or_else(|| ParseError::InconsistentSize(String::new()))
    }

    /// Position of the single occurrence of `ch`.
    pub fn find_unique(&self, ch: char) -> Result<Point, ParseError> {
        let mut found = self.positions(|&c| c == ch).into_iter();
        let first = found.next().ok_or(ParseError::MissingMarker(ch))?;
        if let Some(second) = found.next() {
            return Err(ParseError::DuplicateMarker { ch, first, second });
        }
        Ok(first)
    }
}

/// Parse whitespace- or comma-separated numbers of any type with a
/// [`FromStr`] impl.
pub fn parse_numbers<T: FromStr>(s: &str) -> Result<Vec<T>, ParseError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<T>()
                .map_err(|_| ParseError::InvalidNumber(tok.to_string()))
        })
        .collect()
}

/// Parse one `x,y` coordinate pair per line.
pub fn parse_coords(s: &str) -> Result<Vec<Point>, ParseError> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| -> Result<Point, ParseError> {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| ParseError::InvalidNumber(line.to_string()))?;
            let coord = |t: &str| {
                t.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidNumber(line.to_string()))
            };
            Ok(Point::new(coord(x)?, coord(y)?))
        })
        .collect()
}

/// Errors that can occur when parsing puzzle text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character with no meaning in this layout was found.
    InvalidRune { ch: char, pos: Point },
    /// A required marker character does not appear.
    MissingMarker(char),
    /// A marker that must be unique appears more than once.
    DuplicateMarker { ch: char, first: Point, second: Point },
    /// A token is not a valid number or coordinate.
    InvalidNumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "layout has no \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateMarker { ch, first, second } => write!(
                f,
                "layout marker \u{201c}{ch}\u{201d} appears at both {first} and {second}"
            ),
            Self::InvalidNumber(tok) => write!(f, "invalid number: {tok:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Tile;

    const ROOM: &str = "
        ####
        #S.#
        #.E#
        ####
    ";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.size(), Point::new(4, 4));
        assert_eq!(g.at(Point::new(1, 1)), Some('S'));
        assert_eq!(g.at(Point::new(2, 2)), Some('E'));
    }

    #[test]
    fn inconsistent_size_error() {
        let result = Grid::parse("AB\nCDE");
        assert!(matches!(result, Err(ParseError::InconsistentSize(_))));
    }

    #[test]
    fn empty_text_is_an_empty_grid() {
        let g = Grid::parse("  \n ").unwrap();
        assert!(g.bounds().is_empty());
    }

    #[test]
    fn try_map_rejects_unknown_runes() {
        let g = Grid::parse("#.\n.x").unwrap();
        let err = g
            .try_map(|ch| match ch {
                '#' => Some(Tile::Wall),
                '.' => Some(Tile::Open),
                _ => None,
            })
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn find_unique_markers() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.find_unique('S'), Ok(Point::new(1, 1)));
        assert_eq!(g.find_unique('^'), Err(ParseError::MissingMarker('^')));
        assert!(matches!(
            g.find_unique('#'),
            Err(ParseError::DuplicateMarker { ch: '#', .. })
        ));
    }

    #[test]
    fn numbers_and_coords() {
        assert_eq!(parse_numbers::<u64>("125 17\n").unwrap(), vec![125, 17]);
        assert_eq!(parse_numbers::<u8>("1,2, 3").unwrap(), vec![1, 2, 3]);
        assert!(parse_numbers::<u64>("1 x").is_err());
        assert_eq!(
            parse_numbers::<u8>("7,256"),
            Err(ParseError::InvalidNumber("256".into()))
        );
        assert_eq!(
            parse_coords("5,4\n 4,2\n\n").unwrap(),
            vec![Point::new(5, 4), Point::new(4, 2)]
        );
        assert!(parse_coords("5;4").is_err());
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ParseError::MissingMarker('E');
        assert_eq!(err.to_string(), "layout has no \u{201c}E\u{201d} marker");
    }
}
