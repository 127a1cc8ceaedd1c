pub mod dataset;
pub mod error;
pub mod experiment;
pub mod graph;
pub mod heuristic;

pub use error::{Error, Result};
pub use graph::Graph;
pub use heuristic::{solve, CoverReport, GreedyCover, HeuristicConfig, SelectionPolicy};
