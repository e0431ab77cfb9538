//! Read-only projections over a [`Timeline`] for display and reporting.
//!
//! Nothing here mutates: the runtime renders these under the same lock that
//! guards the timeline and prints after release.

use serde::Serialize;

use crate::timeline::Timeline;

/// One completed window in the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowReport {
    pub range: String,
    pub annotation_count: usize,
    /// `None` only if the run stopped before the seal completed.
    pub summary: Option<String>,
}

/// Final report: one record per completed window, in chronological order.
pub fn final_report(timeline: &Timeline) -> Vec<WindowReport> {
    timeline
        .completed()
        .iter()
        .map(|w| WindowReport {
            range: w.range_label(),
            annotation_count: w.annotation_count(),
            summary: w.summary().map(str::to_string),
        })
        .collect()
}

/// Multi-line live view: the most recent raw annotation, the current
/// window's range and annotation count, and the most recently completed
/// window's summary.
pub fn live_view(timeline: &Timeline, latest: Option<&str>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "current: {}",
        latest.unwrap_or("(waiting for annotations)")
    ));

    if let Some(current) = timeline.current() {
        lines.push(format!("window: {}", current.range_label()));
        lines.push(format!(
            "annotations in window: {}",
            current.annotation_count()
        ));
    }

    if let Some(summary) = timeline
        .completed()
        .iter()
        .rev()
        .find_map(|w| w.summary())
    {
        lines.push(format!("latest summary: {summary}"));
    }

    lines.join("\n")
}

// ─── Tests ────────────────────────────────────────────────────────
