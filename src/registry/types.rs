//! Registry types and structures

use crate::error::{GeneratorError, Result};
use crate::utils::{derive_container_name, is_valid_identifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::trace;

/// Name of one concrete, nominally distinct property iterator type.
///
/// Always a valid identifier ending in `Iterator`, so the owning container
/// name can be derived without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IteratorTypeName(String);

impl IteratorTypeName {
    /// Create an iterator type name, rejecting malformed registry entries
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(GeneratorError::registry(format!(
                "iterator type name '{}' is not a valid identifier",
                name
            )));
        }
        derive_container_name(&name)?;
        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the owning container type name
    pub fn container(&self) -> ContainerTypeName {
        // `new` already ran the derivation, so it cannot fail here.
        let container = derive_container_name(&self.0).unwrap_or(&self.0);
        ContainerTypeName(container.to_string())
    }
}

impl fmt::Display for IteratorTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl<'de> Deserialize<'de> for IteratorTypeName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        IteratorTypeName::new(name).map_err(serde::de::Error::custom)
    }
}

/// Name of the container (property) type that owns an iterator type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ContainerTypeName(String);

impl ContainerTypeName {
    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One registry entry: the iterator, its derived container and whether the
/// generator emits an adapter and a dispatch case for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    /// Iterator type name
    pub iterator: IteratorTypeName,
    /// Derived container type name
    pub container: ContainerTypeName,
    /// Whether an adapter and dispatch case are emitted
    pub supported: bool,
}

impl RegistryEntry {
    /// Create an entry, deriving the container name
    pub fn new(iterator: IteratorTypeName, supported: bool) -> Self {
        let container = iterator.container();
        Self {
            iterator,
            container,
            supported,
        }
    }
}

/// Ordered, immutable set of iterator type names.
///
/// Insertion order is preserved and drives the order of dispatch cases and
/// adapters in the generated unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TypeRegistry {
    entries: Vec<RegistryEntry>,
}

impl TypeRegistry {
    /// Build a registry from a supported list and a list of registered but
    /// unsupported names.
    ///
    /// Unsupported names keep their registration so they can be listed, but
    /// they never reach a renderer and fall through the dispatch default.
    pub fn new<I, J, S, T>(supported: I, unsupported: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        let supported = supported.into_iter().map(|n| (n.into(), true));
        let unsupported = unsupported.into_iter().map(|n| (n.into(), false));

        for (name, is_supported) in supported.chain(unsupported) {
            let iterator = IteratorTypeName::new(name)?;
            if !seen.insert(iterator.clone()) {
                return Err(GeneratorError::registry(format!(
                    "duplicate iterator type name: '{}'",
                    iterator
                )));
            }
            if !is_supported {
                trace!("Registering '{}' as unsupported", iterator);
            }
            entries.push(RegistryEntry::new(iterator, is_supported));
        }

        Ok(Self { entries })
    }

    /// Build a registry where every name is supported
    pub fn from_supported<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, std::iter::empty::<String>())
    }

    /// All entries in registry order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Supported entries in registry order
    pub fn supported(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(|e| e.supported)
    }

    /// Registered but unsupported entries in registry order
    pub fn unsupported(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(|e| !e.supported)
    }

    /// Look up an entry by iterator type name
    pub fn get(&self, iterator: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.iterator.as_str() == iterator)
    }

    /// Whether the named iterator type is registered and supported
    pub fn is_supported(&self, iterator: &str) -> bool {
        self.get(iterator).is_some_and(|e| e.supported)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_preserves_order() {
        let registry = TypeRegistry::new(
            ["ZedPropertyIterator", "AlphaPropertyIterator"],
            ["MidPropertyIterator"],
        )
        .unwrap();

        let names: Vec<&str> = registry.entries().iter().map(|e| e.iterator.as_str()).collect();
        assert_eq!(
            names,
            vec!["ZedPropertyIterator", "AlphaPropertyIterator", "MidPropertyIterator"]
        );

        let supported: Vec<&str> = registry.supported().map(|e| e.container.as_str()).collect();
        assert_eq!(supported, vec!["ZedProperty", "AlphaProperty"]);

        assert!(registry.is_supported("AlphaPropertyIterator"));
        assert!(!registry.is_supported("MidPropertyIterator"));
        assert!(!registry.is_supported("UnknownPropertyIterator"));
        assert_eq!(registry.unsupported().count(), 1);
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let err = TypeRegistry::new(["FooPropertyIterator"], ["FooPropertyIterator"]).unwrap_err();
        assert!(err.to_string().contains("duplicate iterator type name"));

        let err = TypeRegistry::from_supported(["FooPropertyIterator", "FooPropertyIterator"]).unwrap_err();
        assert_eq!(err.category(), "registry");
    }

    #[test]
    fn test_registry_rejects_malformed_names() {
        assert!(TypeRegistry::from_supported(["FooProperty"]).is_err());
        assert!(TypeRegistry::from_supported(["Foo PropertyIterator"]).is_err());
        assert!(TypeRegistry::from_supported(["vocab.FooPropertyIterator"]).is_err());
    }

    #[test]
    fn test_entry_derives_container() {
        let entry = RegistryEntry::new(IteratorTypeName::new("FooPropertyIterator").unwrap(), true);
        assert_eq!(entry.container.as_str(), "FooProperty");
        assert_eq!(format!("{}Iterator", entry.container), entry.iterator.to_string());
    }

    #[test]
    fn test_iterator_name_deserialize_validates() {
        let name: IteratorTypeName = serde_yaml::from_str("FooPropertyIterator").unwrap();
        assert_eq!(name.as_str(), "FooPropertyIterator");

        let result: std::result::Result<IteratorTypeName, _> = serde_yaml::from_str("FooProperty");
        assert!(result.is_err());
    }

    #[test]
    fn test_names_honor_width_and_fill() {
        let iterator = IteratorTypeName::new("FooPropertyIterator").unwrap();
        let container = iterator.container();
        assert_eq!(format!("{:<14}|", container), "FooProperty   |");
        assert_eq!(format!("{:>22}|", iterator), "   FooPropertyIterator|");
        assert_eq!(format!("{:.<13}", container), "FooProperty..");
    }

    #[test]
    fn test_empty_registry() {
        let registry = TypeRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.supported().count(), 0);
    }
}
