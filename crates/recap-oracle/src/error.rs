//! Error types for the oracle boundary.
//!
//! Every variant is recoverable from the engine's point of view: a failed
//! summarization seals its window with an error marker and the timeline
//! moves on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle command failed: {0}")]
    CommandFailed(String),

    #[error("oracle returned empty output")]
    EmptyOutput,

    #[error("oracle io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no usable oracle among {0} candidate(s)")]
    NoUsableOracle(usize),
}
