//! Shared startup for the generator binaries

mod logger;
mod runner;

pub use logger::{init_logging, StartupLogger};
pub use runner::{run_to_stdout, write_output, RunOutcome};
