use bitvec::prelude::*;

use crate::graph::Graph;
use crate::heuristic::candidate::HeadSet;
use crate::heuristic::state::ActiveState;

/// Computes the closed neighborhood of `head` within the active set.
///
/// Head members come first, then the active neighbors of each member in
/// adjacency order. A neighbor shared by both members of a pair appears once.
pub fn closed_neighborhood(graph: &Graph, state: &ActiveState, head: HeadSet) -> Vec<usize> {
    let mut in_closure = bitvec![0; graph.n()];
    let mut closure = Vec::new();

    for x in head.vertices() {
        if !in_closure[x] {
            in_closure.set(x, true);
            closure.push(x);
        }
    }
    for x in head.vertices() {
        for &nb in graph.neighbors(x) {
            if !in_closure[nb] && state.is_active(nb) {
                in_closure.set(nb, true);
                closure.push(nb);
            }
        }
    }
    closure
}

/// Deactivates `head` and all its active neighbors, keeping the live degrees
/// of the surviving vertices consistent. Returns how many vertices were removed.
pub fn remove_closed_neighborhood(graph: &Graph, state: &mut ActiveState, head: HeadSet) -> usize {
    closed_neighborhood(graph, state, head)
        .into_iter()
        .filter(|&s| state.deactivate(graph, s))
        .count()
}
