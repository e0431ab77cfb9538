//! Fixed-duration annotation window with one-shot seal semantics.

use chrono::{DateTime, TimeDelta, Utc};

use crate::annotation::Annotation;

// ─── Sentinels ────────────────────────────────────────────────────

/// Summary recorded for a window that closes with zero annotations.
/// The oracle is never consulted for an empty window.
pub const NO_ACTIVITY_SUMMARY: &str = "no activity observed in this window";

/// Prefix of summaries recorded when the oracle fails or times out.
pub const SUMMARY_ERROR_MARKER: &str = "summary unavailable";

// ─── Window ───────────────────────────────────────────────────────

/// A half-open time bucket `[start, start + duration)` of annotations.
///
/// Annotations append in arrival order, which under concurrent producers is
/// not necessarily `captured_at` order; membership is permanent once added.
/// `seal` is a one-way transition — single-call discipline belongs to the
/// [`Timeline`](crate::timeline::Timeline), not to the window itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Timeline-assigned identity, used to address deferred seals.
    seq: u64,
    start: DateTime<Utc>,
    duration: TimeDelta,
    annotations: Vec<Annotation>,
    summary: Option<String>,
    summarized: bool,
}

impl Window {
    pub(crate) fn new(seq: u64, start: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self {
            seq,
            start,
            duration,
            annotations: Vec::new(),
            summary: None,
            summarized: false,
        }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end of the window's range.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.duration
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn is_summarized(&self) -> bool {
        self.summarized
    }

    /// Append iff `start <= captured_at < end`. Rejection is a silent,
    /// normal outcome: the annotation belongs to a window this one does not
    /// cover.
    pub(crate) fn offer(&mut self, annotation: Annotation) -> bool {
        let at = annotation.captured_at();
        if at >= self.start && at < self.end() {
            self.annotations.push(annotation);
            true
        } else {
            false
        }
    }

    /// True once the window's range has fully elapsed. Pure in `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.end()
    }

    /// Record the final summary and mark the window summarized.
    pub(crate) fn seal(&mut self, summary: String) {
        self.summary = Some(summary);
        self.summarized = true;
    }

    /// Annotation display lines in insertion order, one per line.
    pub fn rendered_text(&self) -> String {
        self.annotations
            .iter()
            .map(Annotation::display_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Human-readable `HH:MM:SS - HH:MM:SS` range.
    pub fn range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M:%S"),
            self.end().format("%H:%M:%S")
        )
    }
}

// ─── Tests ────────────────────────────────────────────────────────
