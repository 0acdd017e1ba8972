//! iterbridge - Uniform iteration over go-fed property iterators
//!
//! This crate generates source units that wrap each nominally distinct
//! property iterator type in a small adapter implementing one shared `Iter`
//! interface, plus a dispatch function that picks the right adapter for a
//! dynamically typed value. The same dispatch is available in process
//! through [`bridge`].

pub mod bridge;
pub mod codegen;
pub mod config;
pub mod error;
pub mod registry;
pub mod startup;
pub mod utils;

pub use config::{GeneratorConfig, GeneratorConfigFile, Variant};
pub use error::{GeneratorError, Result};
pub use utils::*;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "iterbridge.yaml";
