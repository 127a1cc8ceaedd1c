//! Candidate head sets and their enumeration.
//!
//! Every iteration considers one singleton per active vertex and one pair per
//! unordered pair of non-adjacent active vertices. Enumeration runs by
//! ascending first vertex, emitting `{a}` before the pairs `{a, b}` with
//! `b > a` in ascending order. That order coincides with the lexicographic
//! order of [`HeadSet`], which both selection rules rely on for tie-breaking.

use std::cmp::Ordering;
use std::fmt;

use crate::graph::Graph;
use crate::heuristic::state::ActiveState;

/// One or two vertices chosen together in a single iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadSet {
    Single(usize),
    /// Independent pair, always stored with the smaller vertex first.
    Pair(usize, usize),
}

impl HeadSet {
    #[inline]
    pub fn first(&self) -> usize {
        match *self {
            HeadSet::Single(a) | HeadSet::Pair(a, _) => a,
        }
    }

    #[inline]
    pub fn second(&self) -> Option<usize> {
        match *self {
            HeadSet::Single(_) => None,
            HeadSet::Pair(_, b) => Some(b),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            HeadSet::Single(_) => 1,
            HeadSet::Pair(..) => 2,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn vertices(&self) -> impl Iterator<Item = usize> {
        std::iter::once(self.first()).chain(self.second())
    }
}

impl Ord for HeadSet {
    /// Lexicographic on the member list: `{a}` sorts right before `{a, b}`.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.first(), self.second()).cmp(&(other.first(), other.second()))
    }
}

impl PartialOrd for HeadSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HeadSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadSet::Single(a) => write!(f, "{{{a}}}"),
            HeadSet::Pair(a, b) => write!(f, "{{{a}, {b}}}"),
        }
    }
}

/// A head set together with the average live degree of its members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub head: HeadSet,
    pub density: f64,
}

impl Candidate {
    /// Total order: density first, then head set.
    pub fn rank(&self, other: &Self) -> Ordering {
        self.density
            .total_cmp(&other.density)
            .then_with(|| self.head.cmp(&other.head))
    }
}

/// Lazy enumeration of all candidates for the current active set.
///
/// Costs O(m²) over the active vertex count `m` when fully drained.
pub struct Candidates<'a> {
    graph: &'a Graph,
    state: &'a ActiveState,
    a: usize,
    // `None` means the singleton for `a` has not been emitted yet.
    next_b: Option<usize>,
}

impl<'a> Candidates<'a> {
    pub fn new(graph: &'a Graph, state: &'a ActiveState) -> Self {
        Self {
            graph,
            state,
            a: 0,
            next_b: None,
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let n = self.graph.n();
        while self.a < n {
            let a = self.a;
            match self.next_b {
                None => {
                    if !self.state.is_active(a) {
                        self.a += 1;
                        continue;
                    }
                    self.next_b = Some(a + 1);
                    return Some(Candidate {
                        head: HeadSet::Single(a),
                        density: self.state.degree(a) as f64,
                    });
                }
                Some(b) if b >= n => {
                    self.a += 1;
                    self.next_b = None;
                }
                Some(b) => {
                    self.next_b = Some(b + 1);
                    if !self.state.is_active(b) || self.graph.has_edge(a, b) {
                        continue;
                    }
                    let sum = self.state.degree(a) + self.state.degree(b);
                    return Some(Candidate {
                        head: HeadSet::Pair(a, b),
                        density: sum as f64 / 2.0,
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heads(graph: &Graph, state: &ActiveState) -> Vec<HeadSet> {
        Candidates::new(graph, state).map(|c| c.head).collect()
    }

    #[test]
    fn test_enumeration_order() {
        // 0-1 adjacent, 2 isolated
        let g = Graph::from_edges(3, [(0, 1)]);
        let state = ActiveState::new(&g);
        assert_eq!(
            heads(&g, &state),
            vec![
                HeadSet::Single(0),
                HeadSet::Pair(0, 2),
                HeadSet::Single(1),
                HeadSet::Pair(1, 2),
                HeadSet::Single(2),
            ]
        );
    }

    #[test]
    fn test_densities() {
        let g = Graph::from_edges(4, [(0, 1), (0, 2), (1, 2)]);
        let state = ActiveState::new(&g);
        let candidates: Vec<_> = Candidates::new(&g, &state).collect();
        let pair = candidates
            .iter()
            .find(|c| c.head == HeadSet::Pair(0, 3))
            .unwrap();
        approx::assert_relative_eq!(pair.density, 1.0);
        let single = candidates
            .iter()
            .find(|c| c.head == HeadSet::Single(2))
            .unwrap();
        approx::assert_relative_eq!(single.density, 2.0);
    }

    #[test]
    fn test_complete_graph_has_only_singletons() {
        let edges = (0..5i64).flat_map(|u| ((u + 1)..5).map(move |v| (u, v)));
        let g = Graph::from_edges(5, edges);
        let state = ActiveState::new(&g);
        let candidates: Vec<_> = Candidates::new(&g, &state).collect();
        assert_eq!(candidates.len(), 5);
        assert!(candidates
            .iter()
            .all(|c| c.head.len() == 1 && c.density == 4.0));
    }

    #[test]
    fn test_skips_removed_vertices() {
        let g = Graph::from_edges(3, [(0, 1)]);
        let mut state = ActiveState::new(&g);
        state.deactivate(&g, 0);
        state.deactivate(&g, 1);
        assert_eq!(heads(&g, &state), vec![HeadSet::Single(2)]);
    }

    #[test]
    fn test_enumeration_is_sorted() {
        let g = Graph::from_edges(6, [(0, 3), (1, 4), (2, 5), (0, 5)]);
        let state = ActiveState::new(&g);
        let listed = heads(&g, &state);
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
    }

    #[test]
    fn test_head_set_order() {
        assert!(HeadSet::Single(1) < HeadSet::Pair(1, 2));
        assert!(HeadSet::Pair(1, 2) < HeadSet::Single(2));
        assert!(HeadSet::Pair(0, 5) < HeadSet::Pair(1, 2));
        assert_eq!(HeadSet::Pair(3, 4).vertices().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(HeadSet::Pair(3, 4).to_string(), "{3, 4}");
    }
}
