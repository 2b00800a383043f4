use anyhow::Context;
use call_proxy::utils::logger;
use call_proxy::{demo_subject, run_demo, CliConfig, StdoutConsole};
use clap::Parser;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting call-proxy");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let proxy = demo_subject(Arc::new(StdoutConsole::new()))
        .context("failed to build the demo subject")?;

    if let Err(e) = run_demo(&proxy) {
        tracing::error!("Demo call sequence failed: {}", e);
        return Err(e).context("demo call sequence failed");
    }

    Ok(())
}
