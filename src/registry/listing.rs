//! Human and machine readable views of a registry

use super::types::TypeRegistry;
use crate::error::Result;
use std::fmt::Write;

/// Output format for registry listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListFormat {
    /// Aligned columns
    #[default]
    Table,
    /// JSON array of entries
    Json,
    /// YAML sequence of entries
    Yaml,
}

/// Render every entry of `registry`, in registry order
pub fn render_listing(registry: &TypeRegistry, format: ListFormat) -> Result<String> {
    match format {
        ListFormat::Table => render_table(registry),
        ListFormat::Json => {
            let mut text = serde_json::to_string_pretty(registry.entries())?;
            text.push('\n');
            Ok(text)
        }
        ListFormat::Yaml => Ok(serde_yaml::to_string(registry.entries())?),
    }
}

fn render_table(registry: &TypeRegistry) -> Result<String> {
    const HEADER: (&str, &str, &str) = ("SUPPORTED", "CONTAINER", "ITERATOR");

    let width = registry
        .entries()
        .iter()
        .map(|e| e.container.as_str().len())
        .chain(std::iter::once(HEADER.1.len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    writeln!(out, "{:<9}  {:<width$}  {}", HEADER.0, HEADER.1, HEADER.2)?;
    for entry in registry.entries() {
        let supported = if entry.supported { "yes" } else { "no" };
        writeln!(out, "{:<9}  {:<width$}  {}", supported, entry.container, entry.iterator)?;
    }
    writeln!(
        out,
        "\n{} registered, {} supported",
        registry.len(),
        registry.supported().count()
    )?;
    Ok(out)
}
