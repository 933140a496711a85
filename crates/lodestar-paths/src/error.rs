use std::fmt;

/// Errors reported by the search routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    /// The frontier emptied before any goal was reached.
    ///
    /// This is an ordinary outcome for callers probing connectivity, not a
    /// failure of the search itself.
    NoPath,
    /// A deterministic walk reached a state with no passable successor in
    /// any rotation, after `moves` moves.
    Boxed { moves: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath => write!(f, "no path to goal"),
            Self::Boxed { moves } => {
                write!(f, "walker boxed in with no passable direction after {moves} moves")
            }
        }
    }
}

impl std::error::Error for SearchError {}
