//! CLI definition using clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "recap", about = "live annotation windowing and summarization")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest annotations from stdin and summarize fixed time windows
    Run(RunOpts),
    /// Probe oracle candidates and report which one answers
    Probe(ProbeOpts),
}

#[derive(clap::Args)]
pub struct RunOpts {
    /// Window duration in seconds
    #[arg(long, env = "RECAP_WINDOW_SECS", default_value = "30")]
    pub window_secs: u64,

    /// Expiry-check interval in milliseconds
    #[arg(long, env = "RECAP_TICK_MS", default_value = "250")]
    pub tick_ms: u64,

    /// Oracle model candidate, tried in order (repeatable)
    #[arg(long = "model")]
    pub model: Vec<String>,

    /// LLM CLI the oracle shells out to
    #[arg(long, env = "RECAP_ORACLE_BIN", default_value = "llm")]
    pub oracle_bin: String,

    /// Oracle call timeout in seconds
    #[arg(long, default_value = "30")]
    pub oracle_timeout_secs: u64,

    /// Summarize offline with the built-in digest (no subprocess)
    #[arg(long)]
    pub offline: bool,

    /// Redraw a live view on each tick
    #[arg(long)]
    pub live: bool,

    /// Emit the final report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct ProbeOpts {
    /// Oracle model candidate, tried in order (repeatable)
    #[arg(long = "model")]
    pub model: Vec<String>,

    /// LLM CLI the oracle shells out to
    #[arg(long, env = "RECAP_ORACLE_BIN", default_value = "llm")]
    pub oracle_bin: String,
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults() {
        let cli = Cli::parse_from(["recap", "run"]);
        let Command::Run(opts) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(opts.window_secs, 30);
        assert_eq!(opts.tick_ms, 250);
        assert_eq!(opts.oracle_bin, "llm");
        assert_eq!(opts.oracle_timeout_secs, 30);
        assert!(opts.model.is_empty());
        assert!(!opts.offline);
        assert!(!opts.live);
        assert!(!opts.json);
    }

    #[test]
    fn run_accepts_repeated_models() {
        let cli = Cli::parse_from([
            "recap",
            "run",
            "--window-secs",
            "10",
            "--model",
            "gemini-2.0-flash",
            "--model",
            "gemini-pro-latest",
        ]);
        let Command::Run(opts) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(opts.window_secs, 10);
        assert_eq!(opts.model, vec!["gemini-2.0-flash", "gemini-pro-latest"]);
    }

    #[test]
    fn probe_defaults() {
        let cli = Cli::parse_from(["recap", "probe"]);
        let Command::Probe(opts) = cli.command else {
            panic!("expected probe command");
        };
        assert!(opts.model.is_empty());
        assert_eq!(opts.oracle_bin, "llm");
    }
}
