//! Source generation for uniform iterator adapters
//!
//! A [`Renderer`] knows the syntax of one target language. The [`Emitter`]
//! walks the registry of a [`GeneratorConfig`] and asks the renderer for the
//! three parts of a generated unit, in order:
//!
//! 1. the preamble (package clause and imports),
//! 2. the dispatch function with one case per supported entry,
//! 3. one adapter per supported entry.
//!
//! Registry order is output order, so identical configurations always render
//! byte-identical units.

mod emitter;
pub mod go;
pub mod rust;

pub use emitter::{generate, Emitter};
pub use go::GoRenderer;
pub use rust::RustRenderer;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::registry::RegistryEntry;
use std::collections::HashMap;

/// Banner placed at the top of every generated unit
pub const GENERATED_BANNER: &str = "// Code generated by iterbridge. DO NOT EDIT.";

/// Syntax of one target language
pub trait Renderer {
    /// Registry key of the renderer
    fn name(&self) -> &str;

    /// Human readable description
    fn description(&self) -> &str;

    /// Extension of files holding the rendered unit
    fn file_extension(&self) -> &str;

    /// Package clause and external dependency declarations
    fn render_preamble(&self, config: &GeneratorConfig, out: &mut String) -> Result<()>;

    /// Dispatch function over every supported entry, default branch last
    fn render_dispatch(&self, config: &GeneratorConfig, out: &mut String) -> Result<()>;

    /// Adapter for one supported entry
    fn render_adapter(&self, config: &GeneratorConfig, entry: &RegistryEntry, out: &mut String) -> Result<()>;
}

/// Registry of available renderers
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer + Send + Sync>>,
}

impl RendererRegistry {
    /// Create an empty renderer registry
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Create a registry holding the Go and Rust renderers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GoRenderer);
        registry.register(RustRenderer);
        registry
    }

    /// Register a renderer under its own name
    pub fn register<R: Renderer + Send + Sync + 'static>(&mut self, renderer: R) {
        self.renderers.insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Option<&(dyn Renderer + Send + Sync)> {
        self.renderers.get(name).map(|r| r.as_ref())
    }

    /// Names of all registered renderers, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
