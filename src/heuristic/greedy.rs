use std::fmt;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::heuristic::candidate::{Candidates, HeadSet};
use crate::heuristic::removal::remove_closed_neighborhood;
use crate::heuristic::state::ActiveState;
use crate::heuristic::{HeuristicConfig, SelectionStrategy};

/// Outcome of a complete run.
#[derive(Debug, Clone)]
pub struct CoverReport {
    /// Total number of vertices chosen as heads.
    pub solution_size: usize,
    /// Head sets in the order they were chosen.
    pub heads: Vec<HeadSet>,
    /// Wall-clock time spent in the selection loop.
    pub elapsed: Duration,
}

impl CoverReport {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn iterations(&self) -> usize {
        self.heads.len()
    }
}

impl fmt::Display for CoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.6}", self.solution_size, self.elapsed_seconds())
    }
}

/// Greedy closed-neighborhood cover.
///
/// Each step enumerates the candidates of the active set, lets the strategy
/// pick a head set, and removes that head together with its active neighbors.
/// The run ends when no vertex is active.
pub struct GreedyCover<'g> {
    graph: &'g Graph,
    state: ActiveState,
    strategy: Box<dyn SelectionStrategy>,
    heads: Vec<HeadSet>,
    solution_size: usize,
}

impl<'g> GreedyCover<'g> {
    pub fn new(graph: &'g Graph, config: &HeuristicConfig) -> Result<Self> {
        Ok(Self::with_strategy(graph, config.build_strategy()?))
    }

    pub fn with_strategy(graph: &'g Graph, strategy: Box<dyn SelectionStrategy>) -> Self {
        Self {
            graph,
            state: ActiveState::new(graph),
            strategy,
            heads: Vec::new(),
            solution_size: 0,
        }
    }

    pub fn state(&self) -> &ActiveState {
        &self.state
    }

    pub fn heads(&self) -> &[HeadSet] {
        &self.heads
    }

    pub fn solution_size(&self) -> usize {
        self.solution_size
    }

    pub fn is_done(&self) -> bool {
        self.state.is_exhausted()
    }

    /// Runs one evaluate/select/remove iteration.
    ///
    /// Returns `Ok(None)` once every vertex has been removed. Failing to find a
    /// candidate while vertices are still active is reported as
    /// [`Error::NoCandidate`].
    pub fn step(&mut self) -> Result<Option<HeadSet>> {
        if self.state.is_exhausted() {
            return Ok(None);
        }

        let candidates = Candidates::new(self.graph, &self.state);
        let Some(head) = self.strategy.select(candidates) else {
            log::error!(
                "no candidate with {} active vertices left",
                self.state.active_count()
            );
            return Err(Error::NoCandidate {
                remaining: self.state.active_count(),
                solution_size: self.solution_size,
            });
        };

        let removed = remove_closed_neighborhood(self.graph, &mut self.state, head);
        self.solution_size += head.len();
        self.heads.push(head);
        log::debug!(
            "iteration {}: head {head}, removed {removed}, {} active",
            self.heads.len(),
            self.state.active_count()
        );
        Ok(Some(head))
    }

    /// Drives the loop to completion.
    pub fn run(mut self) -> Result<CoverReport> {
        log::info!(
            "starting greedy cover on {} vertices, {} edges",
            self.graph.n(),
            self.graph.m()
        );
        let start = Instant::now();
        while self.step()?.is_some() {}
        let elapsed = start.elapsed();

        log::info!(
            "finished after {} iterations: solution size {} in {:.6}s",
            self.heads.len(),
            self.solution_size,
            elapsed.as_secs_f64()
        );
        Ok(CoverReport {
            solution_size: self.solution_size,
            heads: self.heads,
            elapsed,
        })
    }
}

/// Builds the configured strategy and runs it on `graph`.
pub fn solve(graph: &Graph, config: &HeuristicConfig) -> Result<CoverReport> {
    GreedyCover::new(graph, config)?.run()
}
