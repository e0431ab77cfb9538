//! Error types for the windowing core.

use chrono::TimeDelta;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("window duration must be positive, got {0:?}")]
    NonPositiveDuration(TimeDelta),
}
