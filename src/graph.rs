//! Undirected simple graph used by the greedy heuristic.
//!
//! Each vertex keeps its neighbors twice: an ordered list (insertion order,
//! used when walking closed neighborhoods) and a hash set (constant-time
//! adjacency tests during candidate enumeration).

use std::collections::HashSet;
use std::io::BufRead;

use rand::Rng;

use crate::error::{Error, Result};

/// Largest vertex count accepted from a graph file header. The heuristic is
/// cubic in the vertex count, so anything beyond this is a corrupt header.
pub const MAX_VERTICES: usize = 1 << 24;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    neighbors: Vec<Vec<usize>>,
    neighbor_sets: Vec<HashSet<usize>>,
}

impl Graph {
    /// Graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); n],
            neighbor_sets: vec![HashSet::new(); n],
        }
    }

    /// Like [`Graph::with_vertices`], but fails instead of aborting when `n`
    /// is above [`MAX_VERTICES`] or the adjacency cannot be allocated.
    pub fn try_with_vertices(n: usize) -> Result<Self> {
        if n > MAX_VERTICES {
            return Err(Error::VertexCountTooLarge { n, max: MAX_VERTICES });
        }
        let too_large = |_| Error::VertexCountTooLarge { n, max: MAX_VERTICES };
        let mut neighbors = Vec::new();
        neighbors.try_reserve_exact(n).map_err(too_large)?;
        let mut neighbor_sets = Vec::new();
        neighbor_sets.try_reserve_exact(n).map_err(too_large)?;
        neighbors.resize_with(n, Vec::new);
        neighbor_sets.resize_with(n, HashSet::new);
        Ok(Self {
            neighbors,
            neighbor_sets,
        })
    }

    /// Builds a graph from raw endpoint pairs.
    ///
    /// Pairs with an endpoint outside `0..n` and self-loops are dropped without
    /// error. Repeated pairs, in either orientation, are stored once.
    pub fn from_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut graph = Self::with_vertices(n);
        let mut discarded = 0usize;
        for (u, v) in edges {
            if !graph.add_raw_edge(u, v) {
                discarded += 1;
            }
        }
        if discarded > 0 {
            log::debug!("ignored {discarded} invalid or repeated edge entries");
        }
        graph
    }

    /// Parses a graph file: a vertex count followed by whitespace-separated
    /// endpoint pairs.
    ///
    /// Only an unreadable or oversized vertex count is an error. Edge reading
    /// stops at the first token that is not an integer; a trailing unpaired
    /// token is ignored.
    pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        let mut graph: Option<Graph> = None;
        let mut pending: Option<i64> = None;

        'lines: for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                let Some(g) = graph.as_mut() else {
                    let n = token.parse::<usize>().map_err(|_| Error::InvalidVertexCount {
                        token: token.to_string(),
                    })?;
                    graph = Some(Self::try_with_vertices(n)?);
                    continue;
                };
                let Ok(value) = token.parse::<i64>() else {
                    log::warn!("edge list truncated at non-integer token {token:?}");
                    break 'lines;
                };
                match pending.take() {
                    None => pending = Some(value),
                    Some(u) => {
                        g.add_raw_edge(u, value);
                    }
                }
            }
        }

        graph.ok_or(Error::MissingVertexCount)
    }

    /// Random G(n, p) graph, used for tests and benchmarks. `p` is clamped to
    /// `[0, 1]`; NaN gives an edgeless graph.
    pub fn erdos_renyi<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Self {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        let mut graph = Self::with_vertices(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen_bool(p) {
                    graph.add_edge(u, v);
                }
            }
        }
        graph
    }

    /// Inserts the undirected edge `{u, v}`. Returns `false` when the edge is a
    /// self-loop, out of range, or already present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        let n = self.n();
        if u >= n || v >= n || u == v {
            return false;
        }
        if !self.neighbor_sets[u].insert(v) {
            return false;
        }
        self.neighbor_sets[v].insert(u);
        self.neighbors[u].push(v);
        self.neighbors[v].push(u);
        true
    }

    fn add_raw_edge(&mut self, u: i64, v: i64) -> bool {
        match (usize::try_from(u), usize::try_from(v)) {
            (Ok(u), Ok(v)) => self.add_edge(u, v),
            _ => false,
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of edges, each counted once.
    pub fn m(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    /// Neighbors of `v` in insertion order.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbor_sets[u].contains(&v)
    }
}
