//! In-process dispatch from a dynamically typed value to a uniform iterator

use super::iter::{Adapter, Iter, Property};
use crate::config::GeneratorConfig;
use crate::registry::{ContainerTypeName, RegistryEntry, TypeRegistry};
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// Type name reported for an absent value when the nil check is off
pub const NIL_TYPE_NAME: &str = "<nil>";

/// Why a value could not be iterated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The value is absent
    #[error("nil argument")]
    InvalidArgument,

    /// The value's type has no registered, supported adapter
    #[error("type={type_name} not supported")]
    UnsupportedType { type_name: String },
}

/// A value whose concrete type is only known at runtime
#[derive(Clone)]
pub struct Dynamic {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl Dynamic {
    /// Wrap a value, recording its type name
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared value
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            type_name: type_name::<T>(),
            value,
        }
    }

    /// Runtime type name of the wrapped value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Shared handle to the value if it has type `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dynamic")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

type Constructor = fn(&Dynamic) -> Option<Box<dyn Iter>>;

fn construct<P: Property>(value: &Dynamic) -> Option<Box<dyn Iter>> {
    value
        .downcast::<P>()
        .map(|owner| Box::new(Adapter::begin(owner)) as Box<dyn Iter>)
}

struct DispatchCase {
    entry: RegistryEntry,
    construct: Constructor,
}

/// Runtime counterpart of the generated dispatch function.
///
/// Cases follow registry order and only cover supported entries; anything
/// else ends in the default branch.
pub struct Dispatcher {
    check_nil_argument: bool,
    cases: Vec<DispatchCase>,
}

impl Dispatcher {
    /// Start binding property types to the registry of `config`
    pub fn builder(config: &GeneratorConfig) -> DispatcherBuilder {
        DispatcherBuilder {
            registry: config.registry.clone(),
            check_nil_argument: config.check_nil_argument(),
            bindings: Vec::new(),
        }
    }

    /// Uniform iterator positioned at the start of `value`
    pub fn begin(&self, value: Option<&Dynamic>) -> Result<Box<dyn Iter>, DispatchError> {
        let Some(value) = value else {
            if self.check_nil_argument {
                return Err(DispatchError::InvalidArgument);
            }
            return Err(DispatchError::UnsupportedType {
                type_name: NIL_TYPE_NAME.to_string(),
            });
        };

        for case in &self.cases {
            if let Some(iter) = (case.construct)(value) {
                trace!("Dispatched {} to {}", value.type_name(), case.entry.iterator);
                return Ok(iter);
            }
        }

        Err(DispatchError::UnsupportedType {
            type_name: value.type_name().to_string(),
        })
    }

    /// Containers with a dispatch case, in test order
    pub fn containers(&self) -> impl Iterator<Item = &ContainerTypeName> {
        self.cases.iter().map(|case| &case.entry.container)
    }

    /// Number of dispatch cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if every value falls to the default branch
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("check_nil_argument", &self.check_nil_argument)
            .field("containers", &self.containers().collect::<Vec<_>>())
            .finish()
    }
}

/// Collects property type bindings for a [`Dispatcher`]
pub struct DispatcherBuilder {
    registry: TypeRegistry,
    check_nil_argument: bool,
    bindings: Vec<(&'static str, Constructor)>,
}

impl DispatcherBuilder {
    /// Bind a property type under its `ITERATOR_TYPE` name
    pub fn bind<P: Property>(mut self) -> Self {
        let constructor: Constructor = construct::<P>;
        self.bindings.push((P::ITERATOR_TYPE, constructor));
        self
    }

    /// Build the dispatcher.
    ///
    /// Bindings for names that are unregistered or unsupported are dropped,
    /// so values of those types reach the default branch just as they do in
    /// generated code.
    pub fn build(self) -> Dispatcher {
        for (name, _) in &self.bindings {
            if !self.registry.is_supported(name) {
                debug!("Binding for '{}' has no supported registry entry; ignoring", name);
            }
        }

        let cases = self
            .registry
            .supported()
            .filter_map(|entry| {
                self.bindings
                    .iter()
                    .find(|(name, _)| *name == entry.iterator.as_str())
                    .map(|(_, construct)| DispatchCase {
                        entry: entry.clone(),
                        construct: *construct,
                    })
            })
            .collect();

        Dispatcher {
            check_nil_argument: self.check_nil_argument,
            cases,
        }
    }
}
