//! recap-core: annotation windowing engine.
//!
//! Pure domain logic — no IO, no async, no clocks. Time only enters through
//! arguments (`now`, `captured_at`), so every temporal rule is deterministic
//! under test. The runtime crate provides the concurrency shell described in
//! the [`timeline`] module docs.

pub mod annotation;
pub mod error;
pub mod report;
pub mod timeline;
pub mod window;

pub use annotation::Annotation;
pub use error::TimelineError;
pub use report::{WindowReport, final_report, live_view};
pub use timeline::{IngestOutcome, SummaryJob, Timeline};
pub use window::{NO_ACTIVITY_SUMMARY, SUMMARY_ERROR_MARKER, Window};
