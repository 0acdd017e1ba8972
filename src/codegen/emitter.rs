//! Assembles a generated unit from a renderer and a configuration

use super::{Renderer, RendererRegistry};
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use std::io::Write;
use tracing::debug;

/// Writes the preamble, the dispatch function and every adapter, in that order
pub struct Emitter<'a> {
    config: &'a GeneratorConfig,
    renderer: &'a dyn Renderer,
}

impl<'a> Emitter<'a> {
    /// Create an emitter for a configuration and renderer
    pub fn new(config: &'a GeneratorConfig, renderer: &'a dyn Renderer) -> Self {
        Self { config, renderer }
    }

    /// Render the whole unit into a string
    pub fn render(&self) -> Result<String> {
        let adapters = self.config.registry.supported().count();
        debug!(
            renderer = self.renderer.name(),
            package = %self.config.package,
            adapters,
            skipped = self.config.registry.len() - adapters,
            "Rendering iterator adapters"
        );

        let mut out = String::new();
        self.renderer.render_preamble(self.config, &mut out)?;
        self.renderer.render_dispatch(self.config, &mut out)?;
        for entry in self.config.registry.supported() {
            self.renderer.render_adapter(self.config, entry, &mut out)?;
        }

        debug!(bytes = out.len(), "Rendered unit");
        Ok(out)
    }

    /// Render the unit and write it to `writer`
    ///
    /// The unit is rendered completely before the first byte is written, so a
    /// render failure never leaves partial output behind.
    pub fn emit<W: Write>(&self, writer: &mut W) -> Result<()> {
        let text = self.render()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Render a configuration with the renderer its `target` names
pub fn generate(config: &GeneratorConfig) -> Result<String> {
    let renderers = RendererRegistry::with_defaults();
    let renderer = renderers.get(&config.target).ok_or_else(|| {
        GeneratorError::config(format!(
            "Unknown target '{}'. Available: {}",
            config.target,
            renderers.names().join(", ")
        ))
    })?;

    Emitter::new(config, renderer).render()
}
