use bitvec::prelude::*;

use crate::graph::Graph;

/// Per-vertex mutable state of a run: removal flags and live degrees.
///
/// The live degree of an active vertex counts only its active neighbors.
/// Removed vertices keep a degree of zero.
#[derive(Debug, Clone)]
pub struct ActiveState {
    removed: BitVec,
    degree: Vec<usize>,
    active: usize,
}

impl ActiveState {
    /// Every vertex active, live degree equal to its full degree.
    pub fn new(graph: &Graph) -> Self {
        let n = graph.n();
        Self {
            removed: bitvec![0; n],
            degree: (0..n).map(|v| graph.degree(v)).collect(),
            active: n,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.degree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.degree.is_empty()
    }

    #[inline]
    pub fn is_active(&self, v: usize) -> bool {
        !self.removed[v]
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.degree[v]
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// True once no vertex remains active.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.active == 0
    }

    pub fn active_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.removed.iter_zeros()
    }

    /// Removes `v`, lowering the live degree of each neighbor still active.
    /// Returns `false` if `v` was already removed.
    pub(super) fn deactivate(&mut self, graph: &Graph, v: usize) -> bool {
        if self.removed[v] {
            return false;
        }
        self.removed.set(v, true);
        self.active -= 1;
        for &nb in graph.neighbors(v) {
            if !self.removed[nb] {
                self.degree[nb] -= 1;
            }
        }
        self.degree[v] = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let g = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        let state = ActiveState::new(&g);
        assert_eq!(state.len(), 4);
        assert_eq!(state.active_count(), 4);
        assert_eq!(state.degree(0), 3);
        assert_eq!(state.degree(3), 1);
        assert!((0..4).all(|v| state.is_active(v)));
    }

    #[test]
    fn test_deactivate_updates_neighbors() {
        let g = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2)]);
        let mut state = ActiveState::new(&g);

        assert!(state.deactivate(&g, 0));
        assert!(!state.deactivate(&g, 0));
        assert_eq!(state.active_count(), 3);
        assert_eq!(state.degree(0), 0);
        assert_eq!(state.degree(1), 1);
        assert_eq!(state.degree(3), 0);

        assert!(state.deactivate(&g, 1));
        assert_eq!(state.degree(2), 0);
        assert_eq!(state.active_vertices().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_empty_graph_is_exhausted() {
        let state = ActiveState::new(&Graph::with_vertices(0));
        assert!(state.is_empty());
        assert!(state.is_exhausted());
    }
}
