//! Timeline: window assignment, expiry detection, and rollover.
//!
//! The timeline is single-threaded state; the runtime serializes `ingest`,
//! `tick`, `drain`, and `apply_summary` under one mutex. Summarization runs
//! off that lock: `tick` hands back [`SummaryJob`]s for the closed windows
//! and the caller completes each seal later through
//! [`Timeline::apply_summary`]. Empty windows never produce a job — they
//! are sealed inline with [`NO_ACTIVITY_SUMMARY`].

use chrono::{DateTime, TimeDelta, Utc};

use crate::annotation::Annotation;
use crate::error::TimelineError;
use crate::window::{NO_ACTIVITY_SUMMARY, Window};

// ─── Outcomes & jobs ──────────────────────────────────────────────

/// Outcome of offering an annotation to the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Appended to the current window.
    Accepted,
    /// Outside the current window's range — dropped and counted.
    Dropped,
}

/// Deferred-seal work item for one closed, non-empty window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryJob {
    /// Identity of the window awaiting its summary.
    pub seq: u64,
    /// Pre-rendered annotation lines (the summarization input).
    pub rendered: String,
    /// Human-readable window range (prompt context and logging).
    pub range_label: String,
    /// Number of annotations in the window.
    pub annotation_count: usize,
}

// ─── Timeline ─────────────────────────────────────────────────────

/// Owns the window sequence: one open `current` window plus the append-only
/// `completed` list, together forming a contiguous partition of time from
/// the first window's start.
#[derive(Debug)]
pub struct Timeline {
    duration: TimeDelta,
    current: Option<Window>,
    completed: Vec<Window>,
    next_seq: u64,
    dropped: u64,
}

impl Timeline {
    /// Create a timeline. Non-positive durations are rejected before any
    /// window exists.
    pub fn new(duration: TimeDelta) -> Result<Self, TimelineError> {
        if duration <= TimeDelta::zero() {
            return Err(TimelineError::NonPositiveDuration(duration));
        }
        Ok(Self {
            duration,
            current: None,
            completed: Vec::new(),
            next_seq: 0,
            dropped: 0,
        })
    }

    pub fn window_duration(&self) -> TimeDelta {
        self.duration
    }

    /// The open window, if the first annotation has arrived.
    pub fn current(&self) -> Option<&Window> {
        self.current.as_ref()
    }

    /// Closed windows in chronological order.
    pub fn completed(&self) -> &[Window] {
        &self.completed
    }

    /// Count of annotations rejected because they fell outside the current
    /// window's range. Diagnostic only.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Offer an annotation to the current window.
    ///
    /// The first annotation ever ingested defines the timeline's origin: a
    /// window starting at its capture instant. An annotation outside the
    /// current window's range is dropped — typically one that arrived after
    /// the window's nominal end but before a `tick` processed the rollover.
    /// Frequent ticking keeps that rare; the drop is deliberate, not an
    /// error.
    pub fn ingest(&mut self, annotation: Annotation) -> IngestOutcome {
        if self.current.is_none() {
            let origin = annotation.captured_at();
            self.current = Some(self.open_window(origin));
        }

        let accepted = self
            .current
            .as_mut()
            .is_some_and(|current| current.offer(annotation));

        if accepted {
            IngestOutcome::Accepted
        } else {
            self.dropped += 1;
            IngestOutcome::Dropped
        }
    }

    /// Advance the timeline to `now`.
    ///
    /// Every expired window is closed, and its successor opens at the closed
    /// window's `end` — never at `now` — so a late tick produces a run of
    /// back-to-back windows with no gap and no overlap. Each closed
    /// non-empty window yields one [`SummaryJob`]; empty windows seal inline
    /// with the sentinel and yield nothing.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<SummaryJob> {
        let mut jobs = Vec::new();

        while self.current.as_ref().is_some_and(|w| w.is_expired(now)) {
            if let Some(closed) = self.current.take() {
                let next_start = closed.end();
                if let Some(job) = self.close_window(closed) {
                    jobs.push(job);
                }
                self.current = Some(self.open_window(next_start));
            }
        }

        jobs
    }

    /// Shutdown path: close the current window ahead of its natural expiry.
    ///
    /// A current window holding annotations is closed and its job returned
    /// for immediate summarization; an empty current window is discarded
    /// without sealing. Call only after the tick driver has stopped — the
    /// two paths must not compete for the same window.
    pub fn drain(&mut self) -> Option<SummaryJob> {
        let window = self.current.take()?;
        if window.is_empty() {
            return None;
        }
        self.close_window(window)
    }

    /// Complete a deferred seal. Returns false — and changes nothing — for
    /// an unknown seq or a window that is already sealed. At-most-once
    /// sealing is enforced here, not at the call site.
    pub fn apply_summary(&mut self, seq: u64, summary: String) -> bool {
        match self.completed.iter_mut().find(|w| w.seq() == seq) {
            Some(window) if !window.is_summarized() => {
                window.seal(summary);
                true
            }
            _ => false,
        }
    }

    fn open_window(&mut self, start: DateTime<Utc>) -> Window {
        let seq = self.next_seq;
        self.next_seq += 1;
        Window::new(seq, start, self.duration)
    }

    /// Move a closed window into `completed`. Empty windows seal
    /// immediately; non-empty windows stay unsealed until `apply_summary`.
    fn close_window(&mut self, mut window: Window) -> Option<SummaryJob> {
        let job = if window.is_empty() {
            window.seal(NO_ACTIVITY_SUMMARY.to_string());
            None
        } else {
            Some(SummaryJob {
                seq: window.seq(),
                rendered: window.rendered_text(),
                range_label: window.range_label(),
                annotation_count: window.annotation_count(),
            })
        };
        self.completed.push(window);
        job
    }
}

// ─── Tests ────────────────────────────────────────────────────────
