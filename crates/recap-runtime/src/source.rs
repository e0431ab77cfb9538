//! Stdin annotation source.
//!
//! One producer task: each non-empty input line becomes an annotation
//! stamped at arrival. The engine takes any number of concurrent producers
//! through the same shared state; this is simply the built-in one.

use std::sync::Arc;

use chrono::Utc;
use recap_core::{Annotation, IngestOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use crate::engine::EngineState;

/// Read annotations from stdin until EOF or a read error.
pub async fn run_stdin_source(state: Arc<Mutex<EngineState>>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                let annotation = Annotation::new(line, Utc::now());
                let mut st = state.lock().await;
                st.latest = Some(annotation.text().to_string());
                if st.timeline.ingest(annotation) == IngestOutcome::Dropped {
                    tracing::debug!("annotation dropped: outside the current window");
                }
            }
            Ok(None) => {
                tracing::info!("annotation source closed (stdin EOF)");
                break;
            }
            Err(e) => {
                tracing::warn!("stdin read failed: {e}");
                break;
            }
        }
    }
}
