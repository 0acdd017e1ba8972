//! Rust renderer
//!
//! Rust has no open type switch, so the generated unit declares a closed
//! `Iterable` enum with one variant per supported container and an
//! `Unrecognized` fallback that keeps the original value and its type name.
//! Adapters share the owner through `Rc` so `next` and `end` can rebuild an
//! adapter without cloning the property.

use super::{Renderer, GENERATED_BANNER};
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::registry::RegistryEntry;
use crate::utils::{is_valid_identifier, to_snake_case};
use std::fmt::Write as _;

/// Renderer for Rust consumers of the vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl RustRenderer {
    /// Adapter type name for an entry
    pub fn adapter_name(config: &GeneratorConfig, entry: &RegistryEntry) -> String {
        format!("{}{}", config.interface, entry.iterator)
    }

    /// Error type declared next to the interface
    pub fn error_name(config: &GeneratorConfig) -> String {
        format!("{}Error", config.interface)
    }

    /// Dispatch function name, converted to snake case
    pub fn function_name(config: &GeneratorConfig) -> String {
        to_snake_case(&config.dispatch.function)
    }

    fn use_vocab(config: &GeneratorConfig) -> Result<String> {
        let path = &config.vocab.import_path;
        if !path.split("::").all(is_valid_identifier) {
            return Err(GeneratorError::render(
                "rust",
                format!("vocab.import_path '{}' is not a Rust module path", path),
            ));
        }
        let last = path.rsplit("::").next().unwrap_or(path);
        if last == config.vocab.qualifier {
            Ok(format!("use {};", path))
        } else {
            Ok(format!("use {} as {};", path, config.vocab.qualifier))
        }
    }
}

impl Renderer for RustRenderer {
    fn name(&self) -> &str {
        "rust"
    }

    fn description(&self) -> &str {
        "Rust adapters with a closed Iterable enum"
    }

    fn file_extension(&self) -> &str {
        "rs"
    }

    fn render_preamble(&self, config: &GeneratorConfig, out: &mut String) -> Result<()> {
        let has_adapters = config.registry.supported().next().is_some();
        let use_vocab = Self::use_vocab(config)?;

        writeln!(out, "{}", GENERATED_BANNER)?;
        writeln!(out, "// Module: {}", config.package)?;
        writeln!(out)?;
        writeln!(out, "use std::any::Any;")?;
        writeln!(out, "use std::fmt;")?;
        if has_adapters {
            writeln!(out, "use std::rc::Rc;")?;
        }
        writeln!(out)?;
        writeln!(out, "use url::Url;")?;
        writeln!(out)?;
        writeln!(out, "{}", use_vocab)?;
        writeln!(out)?;
        Ok(())
    }

    fn render_dispatch(&self, config: &GeneratorConfig, out: &mut String) -> Result<()> {
        let q = &config.vocab.qualifier;
        let iface = &config.interface;
        let error = Self::error_name(config);
        let function = Self::function_name(config);

        writeln!(out, "/// Failure modes of [`{}`].", function)?;
        writeln!(out, "#[derive(Debug, Clone, PartialEq, Eq)]")?;
        writeln!(out, "pub enum {} {{", error)?;
        writeln!(out, "    /// No value was supplied.")?;
        writeln!(out, "    InvalidArgument,")?;
        writeln!(out, "    /// The value's type has no adapter.")?;
        writeln!(out, "    UnsupportedType(&'static str),")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "impl fmt::Display for {} {{", error)?;
        writeln!(out, "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{")?;
        writeln!(out, "        match self {{")?;
        writeln!(out, "            {}::InvalidArgument => f.write_str(\"nil argument\"),", error)?;
        writeln!(
            out,
            "            {}::UnsupportedType(type_name) => write!(f, \"type={{}} not supported\", type_name),",
            error
        )?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "impl std::error::Error for {} {{}}", error)?;
        writeln!(out)?;

        writeln!(out, "/// Uniform view over every supported property iterator.")?;
        writeln!(out, "pub trait {} {{", iface)?;
        writeln!(out, "    fn has_any(&self) -> bool;")?;
        writeln!(out, "    fn is_iri(&self) -> bool;")?;
        writeln!(out, "    fn get_iri(&self) -> Option<Url>;")?;
        writeln!(out, "    fn get_type(&self) -> Option<{}::Type>;", q)?;
        writeln!(out, "    fn next(&self) -> Box<dyn {}>;", iface)?;
        writeln!(out, "    fn end(&self) -> Box<dyn {}>;", iface)?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "/// Every value [`{}`] can be asked to iterate.", function)?;
        writeln!(out, "pub enum Iterable {{")?;
        for entry in config.registry.supported() {
            writeln!(out, "    {}({}::{}),", entry.container, q, entry.container)?;
        }
        writeln!(out, "    Unrecognized {{")?;
        writeln!(out, "        type_name: &'static str,")?;
        writeln!(out, "        value: Box<dyn Any>,")?;
        writeln!(out, "    }},")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        if config.check_nil_argument() {
            writeln!(
                out,
                "pub fn {}(iterable: Option<Iterable>) -> Result<Box<dyn {}>, {}> {{",
                function, iface, error
            )?;
            writeln!(out, "    let Some(iterable) = iterable else {{")?;
            writeln!(out, "        return Err({}::InvalidArgument);", error)?;
            writeln!(out, "    }};")?;
            writeln!(out)?;
        } else {
            writeln!(
                out,
                "pub fn {}(iterable: Iterable) -> Result<Box<dyn {}>, {}> {{",
                function, iface, error
            )?;
        }

        writeln!(out, "    match iterable {{")?;
        for entry in config.registry.supported() {
            writeln!(out, "        Iterable::{}(v) => {{", entry.container)?;
            writeln!(out, "            let v = Rc::new(v);")?;
            writeln!(out, "            let it = v.begin();")?;
            writeln!(out, "            Ok(Box::new({} {{ p: v, it }}))", Self::adapter_name(config, entry))?;
            writeln!(out, "        }}")?;
        }
        writeln!(
            out,
            "        Iterable::Unrecognized {{ type_name, .. }} => Err({}::UnsupportedType(type_name)),",
            error
        )?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    fn render_adapter(&self, config: &GeneratorConfig, entry: &RegistryEntry, out: &mut String) -> Result<()> {
        let q = &config.vocab.qualifier;
        let iface = &config.interface;
        let name = Self::adapter_name(config, entry);

        writeln!(out)?;
        writeln!(out, "/// Adapter over `{}::{}`.", q, entry.iterator)?;
        writeln!(out, "pub struct {} {{", name)?;
        writeln!(out, "    p: Rc<{}::{}>,", q, entry.container)?;
        writeln!(out, "    it: {}::{},", q, entry.iterator)?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "impl {} for {} {{", iface, name)?;

        let forwards = [
            ("has_any", "bool".to_string()),
            ("is_iri", "bool".to_string()),
            ("get_iri", "Option<Url>".to_string()),
            ("get_type", format!("Option<{}::Type>", q)),
        ];
        for (method, returns) in &forwards {
            writeln!(out, "    fn {}(&self) -> {} {{", method, returns)?;
            writeln!(out, "        self.it.{}()", method)?;
            writeln!(out, "    }}")?;
            writeln!(out)?;
        }

        let rewraps = [("next", "self.it.next()"), ("end", "self.p.end()")];
        for (index, (method, cursor)) in rewraps.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "    fn {}(&self) -> Box<dyn {}> {{", method, iface)?;
            writeln!(out, "        Box::new({} {{", name)?;
            writeln!(out, "            p: Rc::clone(&self.p),")?;
            writeln!(out, "            it: {},", cursor)?;
            writeln!(out, "        }})")?;
            writeln!(out, "    }}")?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::registry::TypeRegistry;

    fn foo_config(check_nil: bool) -> GeneratorConfig {
        let mut config = Variant::Fetch.config().unwrap().with_target("rust");
        config.vocab.import_path = "crate::vocab".to_string();
        config.dispatch.check_nil_argument = check_nil;
        config.registry = TypeRegistry::new(["FooPropertyIterator"], ["BarPropertyIterator"]).unwrap();
        config
    }

    #[test]
    fn test_preamble_uses_vocab_module() {
        let config = foo_config(true);
        let mut out = String::new();
        RustRenderer.render_preamble(&config, &mut out).unwrap();

        assert!(out.starts_with(GENERATED_BANNER));
        assert!(out.contains("use std::rc::Rc;\n"));
        assert!(out.contains("use url::Url;\n"));
        assert!(out.contains("\nuse crate::vocab;\n"));
    }

    #[test]
    fn test_preamble_rejects_go_import_path() {
        let mut config = foo_config(true);
        config.vocab.import_path = "github.com/go-fed/activity/streams/vocab".to_string();
        let err = RustRenderer.render_preamble(&config, &mut String::new()).unwrap_err();
        assert_eq!(err.category(), "render");
    }

    #[test]
    fn test_dispatch_declares_closed_union() {
        let config = foo_config(true);
        let mut out = String::new();
        RustRenderer.render_dispatch(&config, &mut out).unwrap();

        assert!(out.contains("pub enum Iterable {\n    FooProperty(vocab::FooProperty),\n    Unrecognized {\n"));
        assert!(!out.contains("BarProperty"));
        assert!(out.contains("pub fn begin(iterable: Option<Iterable>) -> Result<Box<dyn Iter>, IterError> {"));
        assert!(out.contains("return Err(IterError::InvalidArgument);"));

        let case = out.find("Iterable::FooProperty(v) =>").unwrap();
        let fallback = out.find("Iterable::Unrecognized { type_name, .. } =>").unwrap();
        assert!(case < fallback);
    }

    #[test]
    fn test_dispatch_without_nil_check_takes_value() {
        let mut config = foo_config(false);
        config.dispatch.function = "Begin".to_string();
        let mut out = String::new();
        RustRenderer.render_dispatch(&config, &mut out).unwrap();

        assert!(out.contains("pub fn begin(iterable: Iterable) -> Result<Box<dyn Iter>, IterError> {\n    match iterable {"));
        assert!(!out.contains("IterError::InvalidArgument)"));
    }

    #[test]
    fn test_camel_case_function_becomes_snake_case() {
        let mut config = foo_config(false);
        config.dispatch.function = "beginIter".to_string();
        assert_eq!(RustRenderer::function_name(&config), "begin_iter");

        let mut out = String::new();
        RustRenderer.render_dispatch(&config, &mut out).unwrap();
        assert!(out.contains("pub fn begin_iter(iterable: Iterable) -> Result<Box<dyn Iter>, IterError> {"));
    }

    #[test]
    fn test_adapter_rewraps_owner() {
        let config = foo_config(true);
        let entry = config.registry.get("FooPropertyIterator").unwrap().clone();
        let mut out = String::new();
        RustRenderer.render_adapter(&config, &entry, &mut out).unwrap();

        assert!(out.contains("pub struct IterFooPropertyIterator {\n    p: Rc<vocab::FooProperty>,\n    it: vocab::FooPropertyIterator,\n}"));
        assert!(out.contains("    fn get_type(&self) -> Option<vocab::Type> {\n        self.it.get_type()\n    }"));
        assert!(out.contains("            it: self.it.next(),"));
        assert!(out.contains("            it: self.p.end(),"));
        assert_eq!(out.matches("p: Rc::clone(&self.p),").count(), 2);
    }
}
