//! Generator configuration
//!
//! A configuration describes one generated unit: which renderer to use, the
//! names the unit declares, whether the dispatch function rejects a nil
//! argument up front, and the registry it is instantiated over.
//!
//! # Example Usage
//!
//! ```yaml
//! target: go
//! package: fetch
//! dispatch:
//!   function: begin
//!   argument_type: "interface{}"
//!   check_nil_argument: true
//! registry:
//!   supported:
//!     - ActivityStreamsToPropertyIterator
//!   unsupported:
//!     - ActivityStreamsNamePropertyIterator
//! ```

use crate::error::{GeneratorError, Result};
use crate::registry::builtin::{FEDUTIL_SUPPORTED, FEDUTIL_UNSUPPORTED, FETCH_SUPPORTED, FETCH_UNSUPPORTED};
use crate::registry::TypeRegistry;
use crate::utils::is_valid_identifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Renderer names known to the default renderer registry
const KNOWN_TARGETS: &[&str] = &["go", "rust"];

/// Vocabulary module the Rust renderer uses when none is configured
pub const DEFAULT_RUST_VOCAB_PATH: &str = "crate::vocab";

/// Generator configuration file
///
/// Every field has a default matching the `fetch` deployment, so a file only
/// needs to list what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfigFile {
    /// Renderer name ("go" or "rust")
    #[serde(default = "default_target")]
    pub target: String,
    /// Package (Go) or module label (Rust) of the generated unit
    #[serde(default = "default_package")]
    pub package: String,
    /// Dispatch function settings
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// Name of the uniform iterator interface the adapters implement
    #[serde(default = "default_interface")]
    pub interface: String,
    /// Where the external iterator vocabulary lives
    #[serde(default)]
    pub vocab: VocabConfig,
    /// Iterator type names
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Dispatch function settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Function name
    #[serde(default = "default_function")]
    pub function: String,
    /// Declared argument type (Go only)
    #[serde(default = "default_argument_type")]
    pub argument_type: String,
    /// Reject a nil argument before any type test
    #[serde(default = "default_true")]
    pub check_nil_argument: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            function: default_function(),
            argument_type: default_argument_type(),
            check_nil_argument: true,
        }
    }
}

/// Location of the external vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabConfig {
    /// Import path of the vocabulary package or module
    #[serde(default = "default_import_path")]
    pub import_path: String,
    /// Qualifier used in front of vocabulary type names
    #[serde(default = "default_qualifier")]
    pub qualifier: String,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            import_path: default_import_path(),
            qualifier: default_qualifier(),
        }
    }
}

impl VocabConfig {
    /// Default vocabulary location for a renderer
    pub fn default_for_target(target: &str) -> Self {
        match target {
            "rust" => Self {
                import_path: DEFAULT_RUST_VOCAB_PATH.to_string(),
                qualifier: default_qualifier(),
            },
            _ => Self::default(),
        }
    }

    /// Whether this is the untouched default location for `target`
    pub fn is_default_for(&self, target: &str) -> bool {
        *self == Self::default_for_target(target)
    }
}

/// Registry lists as written in a configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Supported iterator type names, in output order
    #[serde(default)]
    pub supported: Vec<String>,
    /// Registered iterator type names that get no adapter
    #[serde(default)]
    pub unsupported: Vec<String>,
}

fn default_target() -> String {
    "go".to_string()
}

fn default_package() -> String {
    "fetch".to_string()
}

fn default_interface() -> String {
    "Iter".to_string()
}

fn default_function() -> String {
    "begin".to_string()
}

fn default_argument_type() -> String {
    "interface{}".to_string()
}

fn default_true() -> bool {
    true
}

fn default_import_path() -> String {
    "github.com/go-fed/activity/streams/vocab".to_string()
}

fn default_qualifier() -> String {
    "vocab".to_string()
}

impl GeneratorConfigFile {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| GeneratorError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            )))?;

        debug!("Loaded generator config from {}", path.as_ref().display());
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| GeneratorError::config(format!("Failed to parse YAML config: {}", e)))
    }

    /// Serialize the configuration back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    ///
    /// Checks identifiers and the target; registry names are checked when the
    /// registry is built.
    pub fn validate(&self) -> Result<()> {
        if !KNOWN_TARGETS.contains(&self.target.as_str()) {
            return Err(GeneratorError::config(format!(
                "Invalid target: {}. Use 'go' or 'rust'",
                self.target
            )));
        }

        let identifiers = [
            ("package", &self.package),
            ("dispatch.function", &self.dispatch.function),
            ("interface", &self.interface),
            ("vocab.qualifier", &self.vocab.qualifier),
        ];
        for (field, value) in identifiers {
            if !is_valid_identifier(value) {
                return Err(GeneratorError::config(format!(
                    "{} must be an identifier, got '{}'",
                    field, value
                )));
            }
        }

        if self.dispatch.argument_type.trim().is_empty() {
            return Err(GeneratorError::config("dispatch.argument_type cannot be empty"));
        }

        if self.vocab.import_path.trim().is_empty() {
            return Err(GeneratorError::config("vocab.import_path cannot be empty"));
        }

        Ok(())
    }

    /// Validate and build the runtime configuration
    pub fn into_config(self) -> Result<GeneratorConfig> {
        self.validate()?;

        // Serde fills an absent `vocab` with the Go location.
        let vocab = if self.vocab.is_default_for("go") {
            VocabConfig::default_for_target(&self.target)
        } else {
            self.vocab
        };

        let registry = TypeRegistry::new(self.registry.supported, self.registry.unsupported)?;
        if registry.supported().next().is_none() {
            warn!("Registry has no supported entries; dispatch will reject every value");
        }

        Ok(GeneratorConfig {
            target: self.target,
            package: self.package,
            dispatch: self.dispatch,
            interface: self.interface,
            vocab,
            registry,
        })
    }
}

/// Validated configuration of one generated unit
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Renderer name
    pub target: String,
    /// Package or module label
    pub package: String,
    /// Dispatch function settings
    pub dispatch: DispatchConfig,
    /// Uniform iterator interface name
    pub interface: String,
    /// External vocabulary location
    pub vocab: VocabConfig,
    /// Ordered registry
    pub registry: TypeRegistry,
}

impl GeneratorConfig {
    /// Whether the dispatch function rejects a nil argument before type tests
    pub fn check_nil_argument(&self) -> bool {
        self.dispatch.check_nil_argument
    }

    /// Same configuration rendered by a different target.
    ///
    /// A vocabulary location still at the old target's default moves to the
    /// new target's default; a configured location is kept.
    pub fn with_target<S: Into<String>>(mut self, target: S) -> Self {
        let target = target.into();
        if self.vocab.is_default_for(&self.target) {
            self.vocab = VocabConfig::default_for_target(&target);
        }
        self.target = target;
        self
    }

    /// Same configuration with the vocabulary at `import_path`
    pub fn with_vocab_path<S: Into<String>>(mut self, import_path: S) -> Self {
        self.vocab.import_path = import_path.into();
        self
    }
}

/// The two deployed configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Private `begin(interface{})` with a nil check and plain-value
    /// properties excluded
    Fetch,
    /// Exported `Begin(vocab.Type)` without a nil check, every property
    /// supported
    Fedutil,
}

impl Variant {
    /// Configuration file equivalent of this variant
    pub fn config_file(self) -> GeneratorConfigFile {
        let (package, function, argument_type, check_nil, supported, unsupported) = match self {
            Variant::Fetch => ("fetch", "begin", "interface{}", true, FETCH_SUPPORTED, FETCH_UNSUPPORTED),
            Variant::Fedutil => ("fedutil", "Begin", "vocab.Type", false, FEDUTIL_SUPPORTED, FEDUTIL_UNSUPPORTED),
        };

        GeneratorConfigFile {
            target: default_target(),
            package: package.to_string(),
            dispatch: DispatchConfig {
                function: function.to_string(),
                argument_type: argument_type.to_string(),
                check_nil_argument: check_nil,
            },
            interface: default_interface(),
            vocab: VocabConfig::default(),
            registry: RegistryConfig {
                supported: supported.iter().map(|s| s.to_string()).collect(),
                unsupported: unsupported.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// Validated configuration of this variant
    pub fn config(self) -> Result<GeneratorConfig> {
        self.config_file().into_config()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Fetch => f.write_str("fetch"),
            Variant::Fedutil => f.write_str("fedutil"),
        }
    }
}

/// Example configuration file in YAML format
///
/// Printed by the `init` command as a starting point.
pub fn example_config_yaml() -> String {
    r#"# iterbridge generator configuration
# Every field is optional; defaults match the fetch deployment.

# Renderer: go or rust
target: "go"

# Package clause of the generated unit
package: "fetch"

# Dispatch function
dispatch:
  function: "begin"
  argument_type: "interface{}"
  # Reject nil before any type test
  check_nil_argument: true

# Interface implemented by every adapter
interface: "Iter"

# External iterator vocabulary (rust target default: crate::vocab)
vocab:
  import_path: "github.com/go-fed/activity/streams/vocab"
  qualifier: "vocab"

# Iterator type names; order is output order
registry:
  supported:
    - "ActivityStreamsObjectPropertyIterator"
    - "ActivityStreamsToPropertyIterator"
  # Registered but left to the dispatch default branch
  unsupported:
    - "ActivityStreamsNamePropertyIterator"
"#
    .to_string()
}
