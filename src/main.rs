//! iterbridge command line
//!
//! ```bash
//! # Render the fetch adapters
//! iterbridge generate
//!
//! # Render the fedutil adapters as Rust
//! iterbridge generate --variant fedutil --target rust
//!
//! # ... against a vocabulary module of your own
//! iterbridge generate --variant fedutil --target rust --vocab-path activity::vocab
//!
//! # Render from a configuration file
//! iterbridge generate --config iterbridge.yaml
//!
//! # Inspect a registry
//! iterbridge registry --variant fedutil --format json
//!
//! # Check a configuration file
//! iterbridge validate --config iterbridge.yaml
//!
//! # Print an example configuration
//! iterbridge init > iterbridge.yaml
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use iterbridge::codegen::{self, RendererRegistry};
use iterbridge::config::{example_config_yaml, GeneratorConfig, GeneratorConfigFile, Variant};
use iterbridge::registry::{render_listing, ListFormat};
use iterbridge::startup::{init_logging, run_to_stdout, RunOutcome, StartupLogger};
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render iterator adapters and the dispatch function to stdout
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Override the configured renderer (go, rust)
        #[arg(short, long)]
        target: Option<String>,

        /// Override the vocabulary import path (Go package or Rust module)
        #[arg(long)]
        vocab_path: Option<String>,
    },

    /// List the iterator types a configuration registers
    Registry {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Validate a configuration file and render it without printing
    Validate {
        /// Configuration file (YAML)
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print an example configuration file
    Init,
}

#[derive(Args)]
struct SourceArgs {
    /// Built-in configuration to use when no file is given
    #[arg(long, value_enum, default_value_t = Variant::Fetch)]
    variant: Variant,

    /// Configuration file (YAML); takes precedence over --variant
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SourceArgs {
    fn load(&self) -> iterbridge::Result<(GeneratorConfig, String)> {
        match &self.config {
            Some(path) => {
                let config = GeneratorConfigFile::from_file(path)?.into_config()?;
                Ok((config, path.display().to_string()))
            }
            None => Ok((self.variant.config()?, format!("built-in '{}' variant", self.variant))),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let outcome = match cli.command {
        Commands::Generate { source, target, vocab_path } => {
            let (mut config, origin) = source.load().map_err(|e| {
                error!("Failed to load configuration: {}", e);
                e
            })?;
            if let Some(target) = target {
                config = config.with_target(target);
            }
            if let Some(path) = vocab_path {
                config = config.with_vocab_path(path);
            }
            StartupLogger::display_config_summary(&config, &origin);
            run_to_stdout(move || codegen::generate(&config)).await?
        }
        Commands::Registry { source, format } => {
            let (config, origin) = source.load()?;
            debug!("Listing registry from {}", origin);
            run_to_stdout(move || render_listing(&config.registry, format)).await?
        }
        Commands::Validate { config } => {
            let path = config.display().to_string();
            let config = GeneratorConfigFile::from_file(&config)?.into_config()?;
            let text = codegen::generate(&config)?;
            debug!("Rendered {} bytes with the '{}' renderer", text.len(), config.target);

            let summary = format!(
                "{}: valid ({} renderer, {} supported, {} unsupported; renderers: {})\n",
                path,
                config.target,
                config.registry.supported().count(),
                config.registry.unsupported().count(),
                RendererRegistry::with_defaults().names().join(", ")
            );
            run_to_stdout(move || Ok(summary)).await?
        }
        Commands::Init => run_to_stdout(|| Ok(example_config_yaml())).await?,
    };

    if outcome == RunOutcome::Interrupted {
        std::process::exit(0);
    }
    Ok(())
}
