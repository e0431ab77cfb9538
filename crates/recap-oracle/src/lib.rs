//! recap-oracle: the summarization boundary.
//!
//! Provides the [`SummaryOracle`] trait (sync, mock-injectable), a
//! subprocess-backed adapter, a deterministic offline adapter, prompt
//! construction, and pre-start candidate resolution. No windowing logic —
//! pure collaborator boundary.

pub mod digest;
pub mod error;
pub mod oracle;
pub mod probe;
pub mod prompt;

pub use digest::DigestOracle;
pub use error::OracleError;
pub use oracle::{CommandOracle, SummaryOracle};
pub use probe::{DEFAULT_MODEL_CANDIDATES, resolve_oracle};
pub use prompt::build_prompt;
