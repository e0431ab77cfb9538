//! recap: live annotation windowing and summarization binary.
//! Single-process binary: stdin source, tick loop, and summarizer worker
//! all run in-process.

use clap::Parser;
use recap_oracle::{CommandOracle, DEFAULT_MODEL_CANDIDATES, SummaryOracle, resolve_oracle};

mod cli;
mod engine;
mod report_out;
mod source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("RECAP_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match args.command {
        cli::Command::Run(opts) => {
            let oracle = engine::build_oracle(&opts)?;
            engine::run(opts, oracle).await?;
        }
        cli::Command::Probe(opts) => {
            let models: Vec<String> = if opts.model.is_empty() {
                DEFAULT_MODEL_CANDIDATES.iter().map(|m| m.to_string()).collect()
            } else {
                opts.model.clone()
            };
            let candidates = models
                .iter()
                .map(|model| CommandOracle::new(&opts.oracle_bin).with_model(model))
                .collect();
            let resolved = resolve_oracle(candidates)?;
            println!("oracle: {}", resolved.name());
        }
    }

    Ok(())
}
