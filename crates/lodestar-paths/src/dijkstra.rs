//! Dijkstra-family searches: earliest-exit cost and every co-optimal path.
//!
//! Node status moves from unvisited to frontier on discovery and from
//! frontier to finalized on the first pop. A finalized node keeps its cost
//! for the rest of the run, but further entries reaching it at exactly that
//! cost are still accepted as alternative optimal predecessors. Entries at a
//! higher cost are discarded.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use log::{debug, trace};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::table::{DistanceTable, Relax};
use crate::traits::{Cost, WeightedPather};

/// Minimum cost from `start` to the first node satisfying `is_goal`.
///
/// Returns [`SearchError::NoPath`] when no goal is reachable.
pub fn shortest_cost<P: WeightedPather>(
    pather: &P,
    start: P::Node,
    is_goal: impl Fn(P::Node) -> bool,
) -> Result<Cost, SearchError> {
    let mut dist = DistanceTable::new();
    let mut finalized: HashSet<P::Node> = HashSet::new();
    let mut open = Frontier::new();
    let mut nbuf = Vec::new();

    dist.relax(start, 0);
    open.push(start, 0);

    while let Some((node, cost)) = open.pop() {
        // Stale entry superseded by a cheaper one.
        if !finalized.insert(node) {
            continue;
        }
        if is_goal(node) {
            debug!(
                "shortest_cost: reached goal at cost {cost} after {} expansions",
                finalized.len()
            );
            return Ok(cost);
        }

        nbuf.clear();
        pather.neighbors(node, &mut nbuf);
        for &next in nbuf.iter() {
            if finalized.contains(&next) {
                continue;
            }
            let tentative = cost + pather.cost(node, next);
            if matches!(dist.relax(next, tentative), Relax::Discovered | Relax::Improved) {
                open.push(next, tentative);
            }
        }
    }

    debug!("shortest_cost: no path after {} expansions", finalized.len());
    Err(SearchError::NoPath)
}

/// Every minimum-cost path from a start node to the goal set.
///
/// Paths are stored as a predecessor graph: for each node on some optimal
/// path, the nodes it can be entered from at its optimal cost.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    start: N,
    cost: Cost,
    goals: Vec<N>,
    preds: HashMap<N, Vec<N>>,
}

impl<N: Copy + Eq + Hash> ShortestPaths<N> {
    /// The optimal cost.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    #[inline]
    pub fn start(&self) -> N {
        self.start
    }

    /// Goal nodes reached at the optimal cost, in the order they were found.
    #[inline]
    pub fn goals(&self) -> &[N] {
        &self.goals
    }

    /// Optimal predecessors of `node`, in discovery order.
    pub fn predecessors(&self, node: &N) -> &[N] {
        self.preds.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every node lying on at least one optimal path, endpoints included.
    pub fn nodes(&self) -> HashSet<N> {
        let mut seen: HashSet<N> = self.goals.iter().copied().collect();
        let mut stack: Vec<N> = self.goals.clone();
        while let Some(node) = stack.pop() {
            for &p in self.predecessors(&node) {
                if seen.insert(p) {
                    stack.push(p);
                }
            }
        }
        seen
    }

    /// Distinct images of the optimal-path nodes under `f`, e.g. grid cells
    /// of `(cell, facing)` states.
    pub fn project<K: Eq + Hash>(&self, f: impl Fn(N) -> K) -> HashSet<K> {
        self.nodes().into_iter().map(f).collect()
    }

    /// Enumerate every optimal path from start to a goal.
    ///
    /// The number of paths may grow exponentially with the size of the
    /// graph; prefer [`nodes`](Self::nodes) when only membership matters.
    pub fn paths(&self) -> Vec<Vec<N>> {
        let mut out = Vec::new();
        let mut suffix = Vec::new();
        for &goal in &self.goals {
            self.collect_paths(goal, &mut suffix, &mut out);
        }
        out
    }

    fn collect_paths(&self, node: N, suffix: &mut Vec<N>, out: &mut Vec<Vec<N>>) {
        suffix.push(node);
        if node == self.start {
            out.push(suffix.iter().rev().copied().collect());
        } else {
            for &p in self.predecessors(&node) {
                // Zero-cost cycles can make a node its own ancestor.
                if !suffix.contains(&p) {
                    self.collect_paths(p, suffix, out);
                }
            }
        }
        suffix.pop();
    }
}

fn add_pred<N: Copy + Eq + Hash>(preds: &mut HashMap<N, Vec<N>>, node: N, parent: Option<N>) {
    if let Some(p) = parent {
        let list = preds.entry(node).or_default();
        if !list.contains(&p) {
            list.push(p);
        }
    }
}

/// Minimum cost from `start` to the goal set together with every node on
/// any minimum-cost path.
///
/// Goal nodes are terminal: they are not expanded. Once the first goal is
/// popped its cost is optimal; popping continues only while entries of that
/// same cost remain, so that co-optimal goals and predecessors are
/// collected.
pub fn shortest_paths<P: WeightedPather>(
    pather: &P,
    start: P::Node,
    is_goal: impl Fn(P::Node) -> bool,
) -> Result<ShortestPaths<P::Node>, SearchError> {
    search_paths(pather, start, is_goal, |_, _| {})
}

/// [`shortest_paths`] with a hook that sees the distance table after every
/// relaxation, together with the node just offered.
fn search_paths<P: WeightedPather>(
    pather: &P,
    start: P::Node,
    is_goal: impl Fn(P::Node) -> bool,
    mut observe: impl FnMut(&DistanceTable<P::Node>, P::Node),
) -> Result<ShortestPaths<P::Node>, SearchError> {
    let mut dist = DistanceTable::new();
    let mut finalized: HashMap<P::Node, Cost> = HashMap::new();
    let mut preds: HashMap<P::Node, Vec<P::Node>> = HashMap::new();
    let mut open: Frontier<(P::Node, Option<P::Node>)> = Frontier::new();
    let mut goals = Vec::new();
    let mut best: Option<Cost> = None;
    let mut nbuf = Vec::new();

    dist.relax(start, 0);
    open.push((start, None), 0);

    while let Some(((node, parent), cost)) = open.pop() {
        if best.is_some_and(|b| cost > b) {
            break;
        }
        match finalized.get(&node) {
            Some(&done) if done < cost => continue,
            Some(_) => {
                // Second optimal way in: remember it, but the node's
                // successors were already expanded.
                trace!("shortest_paths: tie at cost {cost}");
                add_pred(&mut preds, node, parent);
                continue;
            }
            None => {
                finalized.insert(node, cost);
                add_pred(&mut preds, node, parent);
            }
        }

        if is_goal(node) {
            best = Some(cost);
            goals.push(node);
            continue;
        }

        nbuf.clear();
        pather.neighbors(node, &mut nbuf);
        for &next in nbuf.iter() {
            let tentative = cost + pather.cost(node, next);
            if let Some(&done) = finalized.get(&next) {
                if done == tentative {
                    add_pred(&mut preds, next, Some(node));
                }
                continue;
            }
            let relaxed = dist.relax(next, tentative);
            observe(&dist, next);
            if relaxed.is_viable() {
                open.push((next, Some(node)), tentative);
            }
        }
    }

    let Some(cost) = best else {
        debug!("shortest_paths: no path after {} expansions", finalized.len());
        return Err(SearchError::NoPath);
    };
    debug!(
        "shortest_paths: cost {cost}, {} goal states, {} finalized, {} pushed",
        goals.len(),
        finalized.len(),
        open.pushed()
    );
    Ok(ShortestPaths {
        start,
        cost,
        goals,
        preds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::TilePather;
    use crate::traits::Pather;
    use lodestar_core::{Grid, Point, Tile};

    /// Explicit weighted digraph for hand-built cases.
    struct Digraph(HashMap<char, Vec<(char, Cost)>>);

    impl Digraph {
        fn new(edges: &[(char, char, Cost)]) -> Self {
            let mut adj: HashMap<char, Vec<(char, Cost)>> = HashMap::new();
            for &(a, b, c) in edges {
                adj.entry(a).or_default().push((b, c));
            }
            Self(adj)
        }
    }

    impl Pather for Digraph {
        type Node = char;
        fn neighbors(&self, n: char, buf: &mut Vec<char>) {
            if let Some(out) = self.0.get(&n) {
                buf.extend(out.iter().map(|&(b, _)| b));
            }
        }
    }

    impl WeightedPather for Digraph {
        fn cost(&self, from: char, to: char) -> Cost {
            self.0[&from]
                .iter()
                .find(|&&(b, _)| b == to)
                .map(|&(_, c)| c)
                .unwrap()
        }
    }

    /// Grid movement where entering a cell costs that cell's weight.
    struct Weighted<'a> {
        tiles: &'a Grid<Tile>,
        weights: &'a Grid<Cost>,
    }

    impl Pather for Weighted<'_> {
        type Node = Point;
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            TilePather::new(self.tiles).neighbors(p, buf);
        }
    }

    impl WeightedPather for Weighted<'_> {
        fn cost(&self, _from: Point, to: Point) -> Cost {
            self.weights.at(to).unwrap()
        }
    }

    /// Grid movement where leaving a cell costs that cell's weight, so a node
    /// reached late can still undercut its first offer.
    struct Leaving<'a>(Weighted<'a>);

    impl Pather for Leaving<'_> {
        type Node = Point;
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            self.0.neighbors(p, buf);
        }
    }

    impl WeightedPather for Leaving<'_> {
        fn cost(&self, from: Point, _to: Point) -> Cost {
            self.0.weights.at(from).unwrap()
        }
    }

    /// Exhaustive search over simple paths: optimal cost and every cell on
    /// some optimal path.
    fn brute_force<P: WeightedPather<Node = Point>>(
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Option<(Cost, HashSet<Point>)> {
        fn dfs<P: WeightedPather<Node = Point>>(
            pather: &P,
            path: &mut Vec<Point>,
            cost: Cost,
            goal: Point,
            best: &mut Option<(Cost, HashSet<Point>)>,
        ) {
            let here = *path.last().unwrap();
            if here == goal {
                let improves = best.as_ref().is_none_or(|(b, _)| cost < *b);
                if improves {
                    *best = Some((cost, path.iter().copied().collect()));
                } else if let Some((b, cells)) = best.as_mut() {
                    if *b == cost {
                        cells.extend(path.iter().copied());
                    }
                }
                return;
            }
            let mut nbuf = Vec::new();
            pather.neighbors(here, &mut nbuf);
            for next in nbuf {
                if path.contains(&next) {
                    continue;
                }
                let c = cost + pather.cost(here, next);
                path.push(next);
                dfs(pather, path, c, goal, best);
                path.pop();
            }
        }
        let mut best = None;
        dfs(pather, &mut vec![start], 0, goal, &mut best);
        best
    }

    fn grid_from_mask(w: i32, h: i32, mask: u32) -> Grid<Tile> {
        let mut g = Grid::new(w, h, Tile::Open);
        g.fill_fn(|p| {
            if mask & (1 << (p.y * w + p.x)) != 0 {
                Tile::Wall
            } else {
                Tile::Open
            }
        });
        g
    }

    #[test]
    fn diamond_keeps_both_branches() {
        let g = Digraph::new(&[
            ('a', 'b', 1),
            ('a', 'c', 1),
            ('b', 'd', 1),
            ('c', 'd', 1),
            ('a', 'd', 3),
        ]);
        let sp = shortest_paths(&g, 'a', |n| n == 'd').unwrap();
        assert_eq!(sp.cost(), 2);
        assert_eq!(sp.goals(), &['d']);
        assert_eq!(sp.nodes(), HashSet::from(['a', 'b', 'c', 'd']));
        assert_eq!(sp.paths(), vec![vec!['a', 'b', 'd'], vec!['a', 'c', 'd']]);
        assert_eq!(shortest_cost(&g, 'a', |n| n == 'd'), Ok(2));
    }

    #[test]
    fn three_way_tie() {
        let g = Digraph::new(&[
            ('a', 'b', 1),
            ('a', 'c', 1),
            ('b', 'd', 1),
            ('c', 'd', 1),
            ('a', 'd', 2),
            ('a', 'e', 1),
            ('e', 'd', 5),
        ]);
        let sp = shortest_paths(&g, 'a', |n| n == 'd').unwrap();
        assert_eq!(sp.paths().len(), 3);
        assert!(!sp.nodes().contains(&'e'));
    }

    #[test]
    fn zero_cost_edges_are_followed() {
        let g = Digraph::new(&[
            ('s', 'a', 1),
            ('s', 'b', 1),
            ('b', 'a', 0),
            ('a', 'b', 0),
            ('b', 'g', 1),
        ]);
        let sp = shortest_paths(&g, 's', |n| n == 'g').unwrap();
        assert_eq!(sp.cost(), 2);
        assert_eq!(sp.nodes(), HashSet::from(['s', 'a', 'b', 'g']));
        let paths = sp.paths();
        assert!(paths.contains(&vec!['s', 'b', 'g']));
        assert!(paths.contains(&vec!['s', 'a', 'b', 'g']));
    }

    #[test]
    fn several_goals_at_equal_cost() {
        let g = Digraph::new(&[('s', 'x', 2), ('s', 'y', 2), ('s', 'z', 3)]);
        let sp = shortest_paths(&g, 's', |n| n != 's').unwrap();
        assert_eq!(sp.cost(), 2);
        assert_eq!(sp.goals(), &['x', 'y']);
    }

    #[test]
    fn start_is_goal() {
        let g = Digraph::new(&[('a', 'b', 1)]);
        let sp = shortest_paths(&g, 'a', |n| n == 'a').unwrap();
        assert_eq!(sp.cost(), 0);
        assert_eq!(sp.paths(), vec![vec!['a']]);
        assert_eq!(shortest_cost(&g, 'a', |n| n == 'a'), Ok(0));
    }

    #[test]
    fn unreachable_goal_is_no_path() {
        let g = Digraph::new(&[('a', 'b', 1), ('c', 'd', 1)]);
        assert_eq!(shortest_cost(&g, 'a', |n| n == 'd'), Err(SearchError::NoPath));
        assert_eq!(
            shortest_paths(&g, 'a', |n| n == 'd').unwrap_err(),
            SearchError::NoPath
        );
    }

    #[test]
    fn matches_brute_force_on_every_4x4_layout() {
        let (w, h) = (4, 4);
        let start = Point::new(0, 0);
        let goal = Point::new(3, 3);
        let fixed = 1 | (1 << 15);
        for mask in 0..(1u32 << 16) {
            if mask & fixed != 0 {
                continue;
            }
            let grid = grid_from_mask(w, h, mask);
            let pather = TilePather::new(&grid);
            let expected = brute_force(&pather, start, goal);
            let got = shortest_paths(&pather, start, |p| p == goal);
            match expected {
                None => {
                    assert_eq!(got.unwrap_err(), SearchError::NoPath, "mask {mask:#x}");
                    assert!(shortest_cost(&pather, start, |p| p == goal).is_err());
                }
                Some((cost, cells)) => {
                    let sp = got.unwrap();
                    assert_eq!(sp.cost(), cost, "mask {mask:#x}");
                    assert_eq!(sp.nodes(), cells, "mask {mask:#x}");
                    assert_eq!(shortest_cost(&pather, start, |p| p == goal), Ok(cost));
                }
            }
        }
    }

    #[test]
    fn matches_brute_force_with_cell_weights() {
        let (w, h) = (4, 3);
        let start = Point::new(0, 0);
        let goal = Point::new(3, 2);
        for mask in 0..(1u32 << 12) {
            if mask & (1 | (1 << 11)) != 0 {
                continue;
            }
            let tiles = grid_from_mask(w, h, mask);
            let mut weights = Grid::new(w, h, 1);
            weights.fill_fn(|p| 1 + ((p.x * 7 + p.y * 5 + mask as i32) % 3) as Cost);
            let pather = Weighted {
                tiles: &tiles,
                weights: &weights,
            };
            let expected = brute_force(&pather, start, goal);
            let got = shortest_paths(&pather, start, |p| p == goal).ok();
            assert_eq!(
                got.map(|sp| (sp.cost(), sp.nodes())),
                expected,
                "mask {mask:#x}"
            );
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let grid = grid_from_mask(4, 4, 0b0000_0110_0100_0000);
        let pather = TilePather::new(&grid);
        let goal = Point::new(3, 3);
        let a = shortest_paths(&pather, Point::new(0, 0), |p| p == goal).unwrap();
        let b = shortest_paths(&pather, Point::new(0, 0), |p| p == goal).unwrap();
        assert_eq!(a.cost(), b.cost());
        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.paths(), b.paths());
    }

    #[test]
    fn table_entries_only_fall_during_a_search() {
        // `a` is first discovered through the expensive edge, then lowered.
        let g = Digraph::new(&[('s', 'a', 10), ('s', 'b', 1), ('b', 'a', 1), ('a', 'g', 1)]);
        let mut history: Vec<(char, Option<Cost>)> = Vec::new();
        let sp = search_paths(&g, 's', |n| n == 'g', |table, node| {
            history.push((node, table.get(&node)));
        })
        .unwrap();
        assert_eq!(sp.cost(), 3);
        assert_eq!(
            history,
            vec![('a', Some(10)), ('b', Some(1)), ('a', Some(2)), ('g', Some(3))]
        );
    }

    #[test]
    fn no_entry_rises_on_weighted_grids() {
        let (w, h) = (5, 4);
        let start = Point::new(0, 0);
        let goal = Point::new(4, 3);
        let mut lowered = 0;
        for mask in (0..(1u32 << 20)).step_by(4099) {
            if mask & (1 | (1 << 19)) != 0 {
                continue;
            }
            let tiles = grid_from_mask(w, h, mask);
            let mut weights = Grid::new(w, h, 1);
            weights.fill_fn(|p| 1 + ((p.x * 5 + p.y * 11 + mask as i32) % 9) as Cost);
            let pather = Leaving(Weighted {
                tiles: &tiles,
                weights: &weights,
            });
            let mut seen: HashMap<Point, Cost> = HashMap::new();
            let result = search_paths(&pather, start, |p| p == goal, |table, node| {
                assert!(table.contains(&node));
                for (n, c) in table.iter() {
                    if let Some(&before) = seen.get(&n) {
                        assert!(c <= before, "mask {mask:#x}: {n} rose from {before} to {c}");
                        if c < before {
                            lowered += 1;
                        }
                    }
                    seen.insert(n, c);
                }
            });
            let plain = shortest_paths(&pather, start, |p| p == goal);
            assert_eq!(
                result.map(|sp| (sp.cost(), sp.nodes())),
                plain.map(|sp| (sp.cost(), sp.nodes())),
                "mask {mask:#x}"
            );
        }
        assert!(lowered > 0);
    }
}
