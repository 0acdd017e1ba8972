//! Iterator type registry: the curated, ordered vocabulary the generator
//! instantiates adapters for

pub mod builtin;
pub mod listing;
pub mod types;

pub use listing::{render_listing, ListFormat};
pub use types::{ContainerTypeName, IteratorTypeName, RegistryEntry, TypeRegistry};
