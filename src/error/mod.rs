//! Error handling module for the generator
//!
//! This module provides the error types shared by the registry, configuration and
//! rendering layers.

mod error;

// Re-export the main error types and utilities
pub use error::{GeneratorError, Result};
