use thiserror::Error;

/// Errors produced while loading graphs or running the heuristic.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph input is empty: expected a vertex count")]
    MissingVertexCount,

    #[error("could not parse vertex count from {token:?}")]
    InvalidVertexCount { token: String },

    #[error("vertex count {n} is too large (at most {max} supported)")]
    VertexCountTooLarge { n: usize, max: usize },

    #[error("graph header declares {found} vertices but {expected} were requested")]
    VertexCountMismatch { expected: usize, found: usize },

    #[error("unsupported node count {0}: only 1000, 2000 or 3000 are allowed")]
    UnsupportedNodeCount(usize),

    #[error("top-k selection needs k >= 1")]
    InvalidTopK,

    /// Raised when vertices remain active but no candidate could be produced.
    /// This indicates a bookkeeping defect, not a valid way to finish.
    #[error("no candidate found with {remaining} vertices still active (solution size so far: {solution_size})")]
    NoCandidate {
        remaining: usize,
        solution_size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
