//! The distance table shared by the best-first searches.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::traits::Cost;

/// Outcome of offering a tentative cost to a [`DistanceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relax {
    /// First time the node was seen.
    Discovered,
    /// The stored cost was lowered.
    Improved,
    /// The offered cost equals the stored one.
    Tied,
    /// The offered cost is higher; the table is unchanged.
    Rejected,
}

impl Relax {
    /// Whether an entry at the offered cost may still lie on a best path.
    #[inline]
    pub fn is_viable(self) -> bool {
        !matches!(self, Relax::Rejected)
    }
}

/// Best-known cost per node.
///
/// Entries are created on first discovery and only ever lowered.
#[derive(Debug, Clone)]
pub struct DistanceTable<N> {
    costs: HashMap<N, Cost>,
}

impl<N: Copy + Eq + Hash> DistanceTable<N> {
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    /// Offer `cost` for `node`, keeping the lower of the stored and offered
    /// values.
    pub fn relax(&mut self, node: N, cost: Cost) -> Relax {
        match self.costs.entry(node) {
            Entry::Vacant(e) => {
                e.insert(cost);
                Relax::Discovered
            }
            Entry::Occupied(mut e) => {
                let stored = *e.get();
                if cost < stored {
                    e.insert(cost);
                    Relax::Improved
                } else if cost == stored {
                    Relax::Tied
                } else {
                    Relax::Rejected
                }
            }
        }
    }

    /// Best-known cost of `node`, if discovered.
    #[inline]
    pub fn get(&self, node: &N) -> Option<Cost> {
        self.costs.get(node).copied()
    }

    #[inline]
    pub fn contains(&self, node: &N) -> bool {
        self.costs.contains_key(node)
    }

    /// Number of discovered nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// All `(node, cost)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (N, Cost)> + '_ {
        self.costs.iter().map(|(&n, &c)| (n, c))
    }
}

impl<N: Copy + Eq + Hash> Default for DistanceTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
