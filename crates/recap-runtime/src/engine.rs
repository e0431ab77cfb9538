//! Engine: wires the annotation source, the timeline, and the summarizer.
//!
//! Concurrency layout:
//! - producers and the tick loop share one `Arc<Mutex<EngineState>>`, the
//!   single exclusion point for the current window;
//! - `tick` emits [`SummaryJob`]s into an mpsc channel;
//! - a single summarizer worker consumes that channel, calls the oracle via
//!   `spawn_blocking` under a timeout, and completes each seal with
//!   `apply_summary`;
//! - shutdown stops the tick loop, lets the worker drain the channel, then
//!   drains the timeline — so exactly one path can close any given window.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use recap_core::{SUMMARY_ERROR_MARKER, SummaryJob, Timeline, live_view};
use recap_oracle::{
    CommandOracle, DEFAULT_MODEL_CANDIDATES, DigestOracle, SummaryOracle, resolve_oracle,
};
use tokio::sync::{Mutex, mpsc};
use tokio::time::{interval, timeout};

use crate::cli::RunOpts;
use crate::report_out;
use crate::source;

/// Shared engine state protected by a mutex.
pub struct EngineState {
    pub timeline: Timeline,
    /// Most recent raw annotation text, for the live view.
    pub latest: Option<String>,
}

/// Resolve the configured oracle before the engine starts.
///
/// Offline mode short-circuits to the digest; otherwise each candidate
/// model is probed once and the first that answers wins.
pub fn build_oracle(opts: &RunOpts) -> anyhow::Result<Arc<dyn SummaryOracle>> {
    if opts.offline {
        tracing::info!("offline mode: summarizing with the digest oracle");
        return Ok(Arc::new(DigestOracle));
    }

    let models: Vec<String> = if opts.model.is_empty() {
        DEFAULT_MODEL_CANDIDATES.iter().map(|m| m.to_string()).collect()
    } else {
        opts.model.clone()
    };

    let candidates = models
        .iter()
        .map(|model| {
            CommandOracle::new(&opts.oracle_bin)
                .with_window_secs(opts.window_secs)
                .with_model(model)
        })
        .collect();

    let resolved = resolve_oracle(candidates)?;
    Ok(Arc::new(resolved))
}

/// Run the engine until stdin EOF or a shutdown signal, then drain and
/// print the final report.
pub async fn run(opts: RunOpts, oracle: Arc<dyn SummaryOracle>) -> anyhow::Result<()> {
    let duration = TimeDelta::seconds(i64::try_from(opts.window_secs)?);
    let timeline = Timeline::new(duration)?;
    let state = Arc::new(Mutex::new(EngineState {
        timeline,
        latest: None,
    }));

    let (job_tx, job_rx) = mpsc::channel::<SummaryJob>(64);
    let oracle_timeout = Duration::from_secs(opts.oracle_timeout_secs);

    let worker_state = Arc::clone(&state);
    let worker_oracle = Arc::clone(&oracle);
    let worker = tokio::spawn(async move {
        run_summarizer(job_rx, worker_state, worker_oracle, oracle_timeout).await;
    });

    let tick_state = Arc::clone(&state);
    let tick_tx = job_tx.clone();
    let tick_ms = opts.tick_ms;
    let live = opts.live;
    let ticker = tokio::spawn(async move {
        run_tick_loop(tick_state, tick_tx, tick_ms, live).await;
    });

    tracing::info!(
        "engine started: {}s windows, tick every {}ms, oracle '{}'",
        opts.window_secs,
        opts.tick_ms,
        oracle.name()
    );

    tokio::select! {
        () = source::run_stdin_source(Arc::clone(&state)) => {}
        () = shutdown_signal() => {}
    }

    // Ordered shutdown: stop the tick driver first so drain is the only
    // remaining path that can close the current window.
    ticker.abort();
    let _ = ticker.await;
    drop(job_tx);
    if let Err(e) = worker.await {
        tracing::warn!("summarizer worker failed: {e}");
    }

    // Close the current window ahead of its expiry and summarize inline —
    // the worker is already gone.
    let drain_job = { state.lock().await.timeline.drain() };
    if let Some(job) = drain_job {
        let summary = summarize_job(&oracle, &job, oracle_timeout).await;
        let mut st = state.lock().await;
        if !st.timeline.apply_summary(job.seq, summary) {
            tracing::warn!("window {} was already sealed", job.seq);
        }
    }

    let st = state.lock().await;
    report_out::print_final_report(&st.timeline, opts.json)
}

/// Wait for ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
            _ = sigterm.recv() => tracing::info!("received SIGTERM, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        tracing::info!("received ctrl-c, shutting down");
    }
}

async fn run_tick_loop(
    state: Arc<Mutex<EngineState>>,
    job_tx: mpsc::Sender<SummaryJob>,
    tick_ms: u64,
    live: bool,
) {
    let mut ticker = interval(Duration::from_millis(tick_ms));

    loop {
        ticker.tick().await;
        tick_once(&state, &job_tx, Utc::now(), live).await;
    }
}

/// One expiry check: roll expired windows over, hand their jobs to the
/// summarizer, and optionally redraw the live view.
async fn tick_once(
    state: &Arc<Mutex<EngineState>>,
    job_tx: &mpsc::Sender<SummaryJob>,
    now: DateTime<Utc>,
    live: bool,
) {
    let (jobs, view) = {
        let mut st = state.lock().await;
        let jobs = st.timeline.tick(now);
        let view = live.then(|| live_view(&st.timeline, st.latest.as_deref()));
        (jobs, view)
    };

    if let Some(view) = view {
        // Clear screen + cursor home
        print!("\x1b[2J\x1b[H");
        println!("{view}");
    }

    for job in jobs {
        if job_tx.send(job).await.is_err() {
            tracing::warn!("summarizer channel closed; job discarded");
        }
    }
}

/// Single consumer of the job channel: summarize and complete each seal.
async fn run_summarizer(
    mut job_rx: mpsc::Receiver<SummaryJob>,
    state: Arc<Mutex<EngineState>>,
    oracle: Arc<dyn SummaryOracle>,
    oracle_timeout: Duration,
) {
    while let Some(job) = job_rx.recv().await {
        let summary = summarize_job(&oracle, &job, oracle_timeout).await;

        let applied = {
            let mut st = state.lock().await;
            st.timeline.apply_summary(job.seq, summary.clone())
        };

        if applied {
            tracing::info!(
                "window summary [{}] ({} annotations): {summary}",
                job.range_label,
                job.annotation_count
            );
        } else {
            tracing::warn!("window {} was already sealed; summary discarded", job.seq);
        }
    }
}

/// Invoke the oracle off the async path, bounded by the configured timeout.
///
/// Failure and timeout both produce the error-marker summary — a window is
/// never left unsealed because the oracle misbehaved.
async fn summarize_job(
    oracle: &Arc<dyn SummaryOracle>,
    job: &SummaryJob,
    oracle_timeout: Duration,
) -> String {
    let call_oracle = Arc::clone(oracle);
    let rendered = job.rendered.clone();
    let range_label = job.range_label.clone();
    let call = tokio::task::spawn_blocking(move || call_oracle.summarize(&rendered, &range_label));

    match timeout(oracle_timeout, call).await {
        Ok(Ok(Ok(summary))) => summary,
        Ok(Ok(Err(e))) => {
            tracing::warn!("oracle failed for [{}]: {e}", job.range_label);
            format!("{SUMMARY_ERROR_MARKER}: {e}")
        }
        Ok(Err(e)) => {
            tracing::warn!("oracle task failed for [{}]: {e}", job.range_label);
            format!("{SUMMARY_ERROR_MARKER}: {e}")
        }
        Err(_) => {
            tracing::warn!(
                "oracle timed out after {}s for [{}]",
                oracle_timeout.as_secs(),
                job.range_label
            );
            format!(
                "{SUMMARY_ERROR_MARKER}: timed out after {}s",
                oracle_timeout.as_secs()
            )
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────
