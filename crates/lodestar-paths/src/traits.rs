use std::hash::Hash;

/// Edge cost and accumulated path cost.
pub type Cost = u64;

/// Minimal search interface: neighbor enumeration over an
/// implicit graph whose nodes are plain values.
pub trait Pather {
    /// Search state. Equality and hashing must be structural.
    type Node: Copy + Eq + Hash;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before
    /// calling. Out-of-bounds or blocked targets are simply not appended.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: Self::Node, to: Self::Node) -> Cost;
}
