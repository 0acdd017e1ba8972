//! Error types and handling for the iterator adapter generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Main error type for the generator
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Registry errors (malformed or duplicate iterator type names)
    #[error("Registry error: {message}")]
    Registry { message: String },

    /// Rendering errors
    #[error("Render error: {renderer}: {message}")]
    Render { renderer: String, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Formatting into the output buffer failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Generic errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl GeneratorError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a registry error
    pub fn registry<S: Into<String>>(message: S) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create a render error
    pub fn render<R: Into<String>, S: Into<String>>(renderer: R, message: S) -> Self {
        Self::Render {
            renderer: renderer.into(),
            message: message.into(),
        }
    }

    /// Whether the error means the output consumer went away.
    ///
    /// A reader closing the pipe early is a normal way for a generator run to
    /// end, so callers treat it as success.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, GeneratorError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            GeneratorError::Config { .. } => "config",
            GeneratorError::Registry { .. } => "registry",
            GeneratorError::Render { .. } => "render",
            GeneratorError::Io(_) => "io",
            GeneratorError::Json(_) => "serialization",
            GeneratorError::Yaml(_) => "yaml",
            GeneratorError::Fmt(_) => "fmt",
            GeneratorError::Internal(_) => "internal",
        }
    }
}
