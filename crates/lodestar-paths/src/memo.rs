//! Memoized counting over recursive state spaces.
//!
//! Counting problems whose recursion overlaps on shared sub-states blow up
//! exponentially without a cache. [`MemoTable`] is the explicit cache;
//! [`BudgetCounter`] counts outcomes of a transition system under a step
//! budget and [`count_splits`] counts ways to tile a string with pieces.

use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

/// Explicit memo table with hit/miss accounting.
///
/// The key must capture every input that affects the cached value.
#[derive(Debug, Clone)]
pub struct MemoTable<K, V> {
    map: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash, V: Copy> MemoTable<K, V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a cached value.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let found = self.map.get(key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Cache `value` under `key` and return it.
    pub fn insert(&mut self, key: K, value: V) -> V {
        self.map.insert(key, value);
        value
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K: Eq + Hash, V: Copy> Default for MemoTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts the states reachable after exactly `budget` transitions.
///
/// `transitions(state, buf)` appends every successor of `state`; a state
/// with no successors contributes nothing. With budget 0 a state counts as
/// one. Results are memoized on the `(state, budget)` pair, so the table
/// never holds more than `distinct states × budget` entries.
pub struct BudgetCounter<S, F> {
    transitions: F,
    memo: MemoTable<(S, u32), u64>,
}

impl<S, F> BudgetCounter<S, F>
where
    S: Clone + Eq + Hash,
    F: Fn(&S, &mut Vec<S>),
{
    pub fn new(transitions: F) -> Self {
        Self {
            transitions,
            memo: MemoTable::new(),
        }
    }

    /// Number of outcomes of `budget` transitions from `state`.
    pub fn count(&mut self, state: S, budget: u32) -> u64 {
        if budget == 0 {
            return 1;
        }
        let key = (state, budget);
        if let Some(n) = self.memo.get(&key) {
            return n;
        }
        let mut next = Vec::new();
        (self.transitions)(&key.0, &mut next);
        let total = next.into_iter().map(|s| self.count(s, budget - 1)).sum();
        self.memo.insert(key, total)
    }

    /// Sum of [`count`](Self::count) over several start states, sharing one
    /// memo table.
    pub fn count_all(&mut self, states: impl IntoIterator<Item = S>, budget: u32) -> u64 {
        let total = states.into_iter().map(|s| self.count(s, budget)).sum();
        debug!(
            "budget counter: {total} outcomes, {} memo entries, {} hits",
            self.memo.len(),
            self.memo.hits()
        );
        total
    }

    /// Number of memoized `(state, budget)` entries.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}

/// Number of ways to write `target` as a concatenation of `pieces`
/// (pieces may repeat). The empty string has exactly one decomposition.
pub fn count_splits<T: AsRef<str>>(target: &str, pieces: &[T]) -> u64 {
    fn from(offset: usize, target: &str, pieces: &[&str], memo: &mut MemoTable<usize, u64>) -> u64 {
        if offset == target.len() {
            return 1;
        }
        if let Some(n) = memo.get(&offset) {
            return n;
        }
        let rest = &target[offset..];
        let mut total = 0;
        for piece in pieces {
            if !piece.is_empty() && rest.starts_with(piece) {
                total += from(offset + piece.len(), target, pieces, memo);
            }
        }
        memo.insert(offset, total)
    }

    let pieces: Vec<&str> = pieces.iter().map(|p| p.as_ref()).collect();
    let mut memo = MemoTable::new();
    from(0, target, &pieces, &mut memo)
}
