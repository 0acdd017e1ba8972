//! Prints the fetch package's iterator adapters to stdout
//!
//! Takes no arguments. A closed pipe, SIGINT or SIGTERM ends the run
//! quietly with status 0.

use iterbridge::codegen;
use iterbridge::config::Variant;
use iterbridge::startup::{init_logging, run_to_stdout, RunOutcome, StartupLogger};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging("warn")?;

    let config = Variant::Fetch.config().map_err(|e| {
        error!("Built-in fetch registry is invalid: {}", e);
        e
    })?;
    StartupLogger::display_config_summary(&config, "built-in 'fetch' variant");

    if run_to_stdout(move || codegen::generate(&config)).await? == RunOutcome::Interrupted {
        std::process::exit(0);
    }
    Ok(())
}
