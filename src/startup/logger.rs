//! Logging setup and startup summary

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use tracing::{debug, info};

/// Initialize logging for a generator binary.
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr because
/// stdout carries the generated unit.
pub fn init_logging(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
        )
        .with(env_filter)
        .try_init()
        .map_err(|e| GeneratorError::config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Startup logger for generator runs
pub struct StartupLogger;

impl StartupLogger {
    /// Log what is about to be generated
    pub fn display_config_summary(config: &GeneratorConfig, source: &str) {
        info!("iterbridge v{} generating from {}", crate::VERSION, source);
        info!(
            "   Target: {} | package: {} | dispatch: {}",
            config.target, config.package, config.dispatch.function
        );
        info!(
            "   Nil argument check: {}",
            if config.check_nil_argument() { "enabled" } else { "disabled" }
        );
        info!(
            "   Registry: {} supported, {} unsupported",
            config.registry.supported().count(),
            config.registry.unsupported().count()
        );
        for entry in config.registry.unsupported() {
            debug!("   Excluded: {}", entry.iterator);
        }
    }
}
