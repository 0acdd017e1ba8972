//! Configuration module for iterbridge
//!
//! This module provides generator configuration loading and the built-in
//! deployment variants.

mod config;

// Re-export the main configuration types
pub use config::{
    example_config_yaml, DispatchConfig, DEFAULT_RUST_VOCAB_PATH, GeneratorConfig, GeneratorConfigFile, RegistryConfig,
    Variant, VocabConfig,
};
