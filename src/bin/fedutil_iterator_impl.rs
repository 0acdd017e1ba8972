//! Prints the fedutil package's iterator adapters to stdout
//!
//! Takes no arguments. Unlike the fetch variant the dispatch function is
//! exported, accepts `vocab.Type` and has no nil check.

use iterbridge::codegen;
use iterbridge::config::Variant;
use iterbridge::startup::{init_logging, run_to_stdout, RunOutcome, StartupLogger};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging("warn")?;

    let config = Variant::Fedutil.config().map_err(|e| {
        error!("Built-in fedutil registry is invalid: {}", e);
        e
    })?;
    StartupLogger::display_config_summary(&config, "built-in 'fedutil' variant");

    if run_to_stdout(move || codegen::generate(&config)).await? == RunOutcome::Interrupted {
        std::process::exit(0);
    }
    Ok(())
}
