pub mod candidate;
pub mod greedy;
pub mod removal;
pub mod selection;
pub mod state;

pub use candidate::{Candidate, Candidates, HeadSet};
pub use greedy::{solve, CoverReport, GreedyCover};
pub use removal::remove_closed_neighborhood;
pub use selection::{Deterministic, RandomizedTopK};
pub use state::ActiveState;

use crate::error::{Error, Result};

/// A rule for picking the head set of one iteration out of the candidates
/// enumerated for the current active vertices.
pub trait SelectionStrategy {
    /// Returns the chosen head set, or `None` if `candidates` was empty.
    fn select(&mut self, candidates: Candidates<'_>) -> Option<HeadSet>;
}

/// Which selection rule the loop uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Always take the global minimum-density candidate.
    #[default]
    Deterministic,
    /// Sample uniformly among the `k` lowest-density candidates.
    RandomizedTopK { k: usize },
}

/// Configuration for a single heuristic run.
#[derive(Debug, Clone, Default)]
pub struct HeuristicConfig {
    /// Selection rule.
    pub policy: SelectionPolicy,
    /// Seed for the randomized policy. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl HeuristicConfig {
    pub fn deterministic() -> Self {
        Self::default()
    }

    /// Randomized top-`k` configuration. Fails for `k == 0`.
    pub fn top_k(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidTopK);
        }
        Ok(Self {
            policy: SelectionPolicy::RandomizedTopK { k },
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Instantiates the configured strategy. The random stream is created here
    /// once and lives for the whole run.
    pub fn build_strategy(&self) -> Result<Box<dyn SelectionStrategy>> {
        let strategy: Box<dyn SelectionStrategy> = match self.policy {
            SelectionPolicy::Deterministic => Box::new(Deterministic),
            SelectionPolicy::RandomizedTopK { k } => match self.seed {
                Some(seed) => Box::new(RandomizedTopK::seeded(k, seed)?),
                None => Box::new(RandomizedTopK::from_entropy(k)?),
            },
        };
        Ok(strategy)
    }
}
