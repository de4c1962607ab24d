//! JSON-RPC response comparison tool
//!
//! Posts every request payload in a directory to two endpoints and reports
//! the differences between their responses.

use anyhow::Result;
use clap::Parser;
use rpcdiff_cli::config::RunConfig;
use rpcdiff_cli::pipeline::Pipeline;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RunConfig::parse();

    info!("Comparing {} against {}", config.host1, config.host2);
    info!("Reading requests from {:?}", config.folder);

    let summary = Pipeline::new(config).run().await?;

    info!(
        "Done: {} compared, {} skipped, {} mismatched",
        summary.processed, summary.skipped, summary.mismatched
    );
    info!("Report written to {:?}", summary.report_path);

    Ok(())
}
