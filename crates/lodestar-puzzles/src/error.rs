use std::fmt;

use lodestar_core::ParseError;
use lodestar_paths::SearchError;

/// Errors reported by the puzzle models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The puzzle text could not be parsed.
    Parse(ParseError),
    /// A search failed; [`SearchError::NoPath`] is the common case.
    Search(SearchError),
    /// The input parsed but does not describe a valid puzzle.
    Invalid(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Invalid(msg) => write!(f, "invalid puzzle: {msg}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<ParseError> for PuzzleError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<SearchError> for PuzzleError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn wraps_and_chains_sources() {
        let e: PuzzleError = SearchError::NoPath.into();
        assert_eq!(e, PuzzleError::Search(SearchError::NoPath));
        assert_eq!(e.to_string(), "search error: no path to goal");
        assert!(e.source().is_some());

        let e: PuzzleError = ParseError::MissingMarker('S').into();
        assert!(matches!(e, PuzzleError::Parse(_)));
        assert!(PuzzleError::Invalid("x".into()).source().is_none());
    }
}
