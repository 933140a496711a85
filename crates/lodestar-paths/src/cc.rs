//! Connected-component labelling.

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::Pather;

/// Connected components of a node set, in order of their first member.
#[derive(Debug, Clone)]
pub struct Components<N> {
    labels: HashMap<N, usize>,
    members: Vec<Vec<N>>,
}

impl<N: Copy + Eq + Hash> Components<N> {
    /// Component ID of `node`, or `None` if it was not labelled.
    pub fn label(&self, node: &N) -> Option<usize> {
        self.labels.get(node).copied()
    }

    /// Members of component `id`, in discovery order.
    pub fn members(&self, id: usize) -> &[N] {
        &self.members[id]
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the member lists of every component.
    pub fn iter(&self) -> impl Iterator<Item = &[N]> + '_ {
        self.members.iter().map(Vec::as_slice)
    }
}

/// Label every node in `nodes` with a connected-component ID.
///
/// Two nodes belong to the same component if there is a path of neighbours
/// (as defined by `pather`) between them. Neighbours outside `nodes` are
/// still explored, so `nodes` only needs to contain one seed per component
/// of interest.
pub fn components<P: Pather>(
    pather: &P,
    nodes: impl IntoIterator<Item = P::Node>,
) -> Components<P::Node> {
    let mut labels: HashMap<P::Node, usize> = HashMap::new();
    let mut members = Vec::new();
    let mut stack = Vec::new();
    let mut nbuf = Vec::new();

    for start in nodes {
        if labels.contains_key(&start) {
            continue;
        }
        let label = members.len();
        let mut group = vec![start];
        labels.insert(start, label);
        stack.clear();
        stack.push(start);

        // Iterative DFS from `start`.
        while let Some(node) = stack.pop() {
            nbuf.clear();
            pather.neighbors(node, &mut nbuf);
            for &next in nbuf.iter() {
                if !labels.contains_key(&next) {
                    labels.insert(next, label);
                    stack.push(next);
                    group.push(next);
                }
            }
        }

        members.push(group);
    }

    Components { labels, members }
}
