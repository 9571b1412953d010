//! Time-frequency Demo - Main Entry Point

use tf_cli::{init_logging, run, EstimateSettings};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    info!("=== timefreq v{} ===", env!("CARGO_PKG_VERSION"));

    let path = std::env::args().nth(1);
    let settings = EstimateSettings::load(path.as_deref())?;
    let summary = run(&settings)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
