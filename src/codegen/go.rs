//! Go renderer
//!
//! Produces gofmt-formatted Go. Each adapter is a value type
//! `iter_<Iterator>` holding the owning property `p` and the cursor `it`, and
//! implements the uniform interface by forwarding to the cursor.

use super::{Renderer, GENERATED_BANNER};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::registry::RegistryEntry;
use std::fmt::Write as _;

/// Renderer for the Go deployment of the adapters
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl GoRenderer {
    /// Adapter type name for an entry
    pub fn adapter_name(entry: &RegistryEntry) -> String {
        format!("iter_{}", entry.iterator)
    }

    /// Import line for the vocabulary, aliased when the qualifier differs
    /// from the last path element
    fn vocab_import(config: &GeneratorConfig) -> String {
        let import_path = &config.vocab.import_path;
        let last = import_path.rsplit('/').next().unwrap_or(import_path);
        if last == config.vocab.qualifier {
            format!("\"{}\"", import_path)
        } else {
            format!("{} \"{}\"", config.vocab.qualifier, import_path)
        }
    }

    /// Whether the unit refers to the vocabulary at all
    fn uses_vocab(config: &GeneratorConfig) -> bool {
        let prefix = format!("{}.", config.vocab.qualifier);
        config.registry.supported().next().is_some() || config.dispatch.argument_type.starts_with(&prefix)
    }
}

impl Renderer for GoRenderer {
    fn name(&self) -> &str {
        "go"
    }

    fn description(&self) -> &str {
        "Go adapters over go-fed style property iterators"
    }

    fn file_extension(&self) -> &str {
        "go"
    }

    fn render_preamble(&self, config: &GeneratorConfig, out: &mut String) -> Result<()> {
        let has_adapters = config.registry.supported().next().is_some();

        writeln!(out, "{}", GENERATED_BANNER)?;
        writeln!(out)?;
        writeln!(out, "package {}", config.package)?;
        writeln!(out)?;
        writeln!(out, "import (")?;
        if config.check_nil_argument() {
            writeln!(out, "\t\"errors\"")?;
        }
        writeln!(out, "\t\"fmt\"")?;
        if has_adapters {
            writeln!(out, "\t\"net/url\"")?;
        }
        if Self::uses_vocab(config) {
            writeln!(out)?;
            writeln!(out, "\t{}", Self::vocab_import(config))?;
        }
        writeln!(out, ")")?;
        writeln!(out)?;
        Ok(())
    }

    fn render_dispatch(&self, config: &GeneratorConfig, out: &mut String) -> Result<()> {
        let q = &config.vocab.qualifier;
        let mut cases = config.registry.supported().peekable();

        writeln!(
            out,
            "func {}(iterable {}) ({}, error) {{",
            config.dispatch.function, config.dispatch.argument_type, config.interface
        )?;

        if config.check_nil_argument() {
            writeln!(out, "\tif iterable == nil {{")?;
            writeln!(out, "\t\treturn nil, errors.New(\"nil argument\")")?;
            writeln!(out, "\t}}")?;
            writeln!(out)?;
        }

        // A type switch binding `v` without any case using it does not compile.
        if cases.peek().is_some() {
            writeln!(out, "\tswitch v := iterable.(type) {{")?;
        } else {
            writeln!(out, "\tswitch iterable.(type) {{")?;
        }

        for entry in cases {
            writeln!(out, "\tcase {}.{}:", q, entry.container)?;
            writeln!(out, "\t\treturn {}{{", Self::adapter_name(entry))?;
            writeln!(out, "\t\t\tp:  v,")?;
            writeln!(out, "\t\t\tit: v.Begin(),")?;
            writeln!(out, "\t\t}}, nil")?;
            writeln!(out)?;
        }

        writeln!(out, "\tdefault:")?;
        writeln!(out, "\t\treturn nil, fmt.Errorf(\"type=%T not supported\", iterable)")?;
        writeln!(out, "\t}}")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    fn render_adapter(&self, config: &GeneratorConfig, entry: &RegistryEntry, out: &mut String) -> Result<()> {
        let q = &config.vocab.qualifier;
        let iface = &config.interface;
        let name = Self::adapter_name(entry);

        writeln!(out)?;
        writeln!(out, "type {} struct {{", name)?;
        writeln!(out, "\tp  {}.{}", q, entry.container)?;
        writeln!(out, "\tit {}.{}", q, entry.iterator)?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        let forwards = [
            ("HasAny", "bool".to_string()),
            ("IsIRI", "bool".to_string()),
            ("GetIRI", "*url.URL".to_string()),
            ("GetType", format!("{}.Type", q)),
        ];
        for (method, returns) in &forwards {
            writeln!(out, "func (i {}) {}() {} {{", name, method, returns)?;
            writeln!(out, "\treturn i.it.{}()", method)?;
            writeln!(out, "}}")?;
            writeln!(out)?;
        }

        // Next advances the cursor, End restarts from the owner's end cursor.
        let rewraps = [("Next", "i.it.Next()"), ("End", "i.p.End()")];
        for (index, (method, cursor)) in rewraps.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "func (i {}) {}() {} {{", name, method, iface)?;
            writeln!(out, "\treturn {}{{", name)?;
            writeln!(out, "\t\tp:  i.p,")?;
            writeln!(out, "\t\tit: {},", cursor)?;
            writeln!(out, "\t}}")?;
            writeln!(out, "}}")?;
        }
        Ok(())
    }
}
