use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::heuristic::candidate::{Candidate, Candidates, HeadSet};
use crate::heuristic::SelectionStrategy;

/// Picks the global minimum-density candidate.
///
/// Candidates are scanned in enumeration order and only a strictly smaller
/// density replaces the current best, so ties go to the first one seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deterministic;

impl SelectionStrategy for Deterministic {
    fn select(&mut self, candidates: Candidates<'_>) -> Option<HeadSet> {
        let mut best: Option<Candidate> = None;
        for candidate in candidates {
            match best {
                Some(b) if candidate.density >= b.density => {}
                _ => best = Some(candidate),
            }
        }
        best.map(|c| c.head)
    }
}

/// Samples uniformly among the `k` best candidates.
///
/// Candidates are ranked by density, then by head set. The random stream is
/// owned by the strategy and advanced across calls.
#[derive(Debug, Clone)]
pub struct RandomizedTopK {
    k: usize,
    rng: ChaCha8Rng,
}

impl RandomizedTopK {
    pub fn new(k: usize, rng: ChaCha8Rng) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidTopK);
        }
        Ok(Self { k, rng })
    }

    pub fn seeded(k: usize, seed: u64) -> Result<Self> {
        Self::new(k, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy(k: usize) -> Result<Self> {
        Self::new(k, ChaCha8Rng::from_entropy())
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl SelectionStrategy for RandomizedTopK {
    fn select(&mut self, candidates: Candidates<'_>) -> Option<HeadSet> {
        let mut pool: Vec<Candidate> = candidates.collect();
        if pool.is_empty() {
            return None;
        }
        let limit = self.k.min(pool.len());
        // Only the first `limit` ranks matter; partition before sorting them.
        if limit < pool.len() {
            pool.select_nth_unstable_by(limit - 1, Candidate::rank);
        }
        let top = &mut pool[..limit];
        top.sort_unstable_by(Candidate::rank);

        let chosen = self.rng.gen_range(0..limit);
        Some(top[chosen].head)
    }
}
