use std::collections::VecDeque;

use crate::table::{DistanceTable, Relax};
use crate::traits::{Cost, Pather};

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Duplicate sources are ignored.
pub fn bfs_map<P: Pather>(pather: &P, sources: &[P::Node], max_dist: Cost) -> DistanceTable<P::Node> {
    let mut dist = DistanceTable::new();
    let mut queue: VecDeque<(P::Node, Cost)> = VecDeque::new();

    for &src in sources {
        if dist.relax(src, 0) == Relax::Discovered {
            queue.push_back((src, 0));
        }
    }

    let mut nbuf = Vec::new();

    while let Some((node, d)) = queue.pop_front() {
        if d >= max_dist {
            continue;
        }
        nbuf.clear();
        pather.neighbors(node, &mut nbuf);

        for &next in nbuf.iter() {
            if dist.contains(&next) {
                continue;
            }
            dist.relax(next, d + 1);
            queue.push_back((next, d + 1));
        }
    }

    dist
}
