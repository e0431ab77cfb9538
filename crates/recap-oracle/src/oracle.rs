//! SummaryOracle trait and CommandOracle (sync subprocess adapter).
//!
//! The trait is synchronous by design: the runtime moves calls off the
//! async path with `spawn_blocking` and bounds them with a timeout, so a
//! slow oracle never stalls annotation ingestion.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::OracleError;
use crate::probe::PROBE_PROMPT;
use crate::prompt::build_prompt;

/// Trait for summarizing a window's annotations. Enables mock injection
/// for testing.
pub trait SummaryOracle: Send + Sync {
    /// Condense pre-rendered annotation lines covering `range_label` into a
    /// short summary.
    fn summarize(&self, rendered: &str, range_label: &str) -> Result<String, OracleError>;

    /// Short identifier for logging and the `probe` command.
    fn name(&self) -> &str;

    /// One-shot validation used during candidate resolution.
    fn probe(&self) -> Result<(), OracleError> {
        self.summarize("[00:00:00] connectivity check", "00:00:00 - 00:00:30")
            .map(drop)
    }
}

impl<T: SummaryOracle + ?Sized> SummaryOracle for &T {
    fn summarize(&self, rendered: &str, range_label: &str) -> Result<String, OracleError> {
        (**self).summarize(rendered, range_label)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn probe(&self) -> Result<(), OracleError> {
        (**self).probe()
    }
}

/// Window duration quoted in prompts unless overridden.
const DEFAULT_WINDOW_SECS: u64 = 30;

/// Oracle backed by an external LLM CLI, using `std::process::Command`.
///
/// The prompt goes to the child's stdin; the summary is its trimmed stdout.
pub struct CommandOracle {
    program: String,
    model: Option<String>,
    window_secs: u64,
}

impl CommandOracle {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            model: None,
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }

    /// Select a model, passed to the CLI as `-m <model>`.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Window duration quoted in the summarization prompt.
    #[must_use]
    pub fn with_window_secs(mut self, window_secs: u64) -> Self {
        self.window_secs = window_secs;
        self
    }

    fn run(&self, prompt: &str) -> Result<String, OracleError> {
        let mut cmd = Command::new(&self.program);
        if let Some(ref model) = self.model {
            cmd.args(["-m", model]);
        }
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(prompt.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OracleError::CommandFailed(format!(
                "exit code {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(OracleError::EmptyOutput);
        }
        Ok(text)
    }
}

impl SummaryOracle for CommandOracle {
    fn summarize(&self, rendered: &str, range_label: &str) -> Result<String, OracleError> {
        let prompt = build_prompt(rendered, range_label, self.window_secs);
        self.run(&prompt)
    }

    fn name(&self) -> &str {
        self.model.as_deref().unwrap_or(&self.program)
    }

    /// Probe with a bare greeting rather than the full summarization
    /// prompt, matching what the CLI expects from an interactive check.
    fn probe(&self) -> Result<(), OracleError> {
        self.run(PROBE_PROMPT).map(drop)
    }
}

// ─── Tests ────────────────────────────────────────────────────────
