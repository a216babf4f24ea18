use anyhow::Context;
use clap::Parser;
use godb_config::GodbConfig;
use tracing_subscriber::EnvFilter;

mod cli;
mod pipeline;
mod progress;
mod summary;

use progress::Progress;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("godb error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = GodbConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log.level)?;

    let progress = Progress::spinner("loading ontology");
    match pipeline::load(&cli.input, &cli.output, &config, &progress).await {
        Ok(report) => {
            progress.finish_clear();
            println!("{}", summary::render(&report));
            Ok(())
        }
        Err(error) => {
            progress.finish_err("load failed");
            Err(error)
        }
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("GODB_LOG")
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
