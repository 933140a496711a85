//! Cycle detection for deterministic walks.
//!
//! A [`Walker`] has exactly one successor per state. [`walk`] follows it
//! until the walker leaves its world or revisits a state; a revisit means
//! the walk would loop forever.

use std::collections::HashSet;
use std::hash::Hash;

use log::trace;

use crate::error::SearchError;

/// Result of a single deterministic transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<S> {
    /// Advance to the given state.
    Move(S),
    /// The walk leaves the bounded world.
    Exit,
    /// No successor exists at all.
    Blocked,
}

/// A process with a single deterministic successor per state.
pub trait Walker {
    type State: Copy + Eq + Hash;

    fn step(&self, state: Self::State) -> Step<Self::State>;
}

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The walker left the world.
    Exit,
    /// A state repeated.
    Cycle,
}

/// Record of a finished walk.
#[derive(Debug, Clone)]
pub struct Trace<S> {
    outcome: Outcome,
    states: Vec<S>,
    moves: usize,
}

impl<S: Copy + Eq + Hash> Trace<S> {
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_cycle(&self) -> bool {
        self.outcome == Outcome::Cycle
    }

    /// Number of moves made, including a final move onto a repeated state.
    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Distinct states in visiting order, the start first.
    #[inline]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Distinct images of the visited states under `f`, e.g. the cells of
    /// `(cell, facing)` states.
    pub fn distinct<K: Eq + Hash>(&self, f: impl Fn(S) -> K) -> HashSet<K> {
        self.states.iter().copied().map(f).collect()
    }
}

/// Follow `walker` from `start` until it exits or repeats a state.
///
/// A [`Step::Blocked`] transition yields [`SearchError::Boxed`].
pub fn walk<W: Walker>(walker: &W, start: W::State) -> Result<Trace<W::State>, SearchError> {
    let mut seen: HashSet<W::State> = HashSet::new();
    let mut states = Vec::new();
    let mut moves = 0;
    let mut state = start;

    seen.insert(state);
    states.push(state);

    loop {
        match walker.step(state) {
            Step::Exit => {
                trace!("walk: exit after {moves} moves");
                return Ok(Trace {
                    outcome: Outcome::Exit,
                    states,
                    moves,
                });
            }
            Step::Blocked => return Err(SearchError::Boxed { moves }),
            Step::Move(next) => {
                moves += 1;
                if !seen.insert(next) {
                    trace!("walk: cycle after {moves} moves");
                    return Ok(Trace {
                        outcome: Outcome::Cycle,
                        states,
                        moves,
                    });
                }
                states.push(next);
                state = next;
            }
        }
    }
}
