//! Iterator contracts and the generic adapter

use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Cursor over the elements of one property.
///
/// Concrete iterator types provide this surface already; they differ only in
/// their nominal type.
pub trait PropertyIterator: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Returns whether any value is set
    fn has_any(&self) -> bool;

    /// Returns whether the current value is an IRI rather than a full object
    fn is_iri(&self) -> bool;

    /// The current IRI, if the value is one
    fn get_iri(&self) -> Option<Url>;

    /// The current object, if the value is one
    fn get_type(&self) -> Option<Value>;

    /// Cursor at the following element
    fn next(&self) -> Self;
}

/// A property that owns a sequence of elements.
pub trait Property: fmt::Debug + Send + Sync + 'static {
    /// Registry name of the cursor type, e.g. `ActivityStreamsToPropertyIterator`
    const ITERATOR_TYPE: &'static str;

    /// Concrete cursor type
    type Cursor: PropertyIterator;

    /// Cursor at the first element
    fn begin(&self) -> Self::Cursor;

    /// Cursor one past the last element
    fn end(&self) -> Self::Cursor;
}

/// Uniform iterator every adapter implements.
///
/// ```text
/// let mut it = dispatcher.begin(Some(&value))?;
/// while !it.equals(it.end().as_ref()) { ...; it = it.next(); }
/// ```
pub trait Iter: fmt::Debug + Send + Sync {
    fn has_any(&self) -> bool;
    fn is_iri(&self) -> bool;
    fn get_iri(&self) -> Option<Url>;
    fn get_type(&self) -> Option<Value>;

    /// Adapter at the following element, same owner
    fn next(&self) -> Box<dyn Iter>;

    /// Adapter at the owner's end cursor, whatever the current position
    fn end(&self) -> Box<dyn Iter>;

    /// Access to the concrete adapter
    fn as_any(&self) -> &dyn Any;

    /// Same owner and same cursor position
    fn equals(&self, other: &dyn Iter) -> bool;
}

/// Pairs one property with a cursor over it.
#[derive(Debug)]
pub struct Adapter<P: Property> {
    owner: Arc<P>,
    cursor: P::Cursor,
}

impl<P: Property> Adapter<P> {
    /// Adapter anchored at the owner's first element
    pub fn begin(owner: Arc<P>) -> Self {
        let cursor = owner.begin();
        Self { owner, cursor }
    }

    /// Adapter at an explicit cursor
    pub fn new(owner: Arc<P>, cursor: P::Cursor) -> Self {
        Self { owner, cursor }
    }

    pub fn owner(&self) -> &Arc<P> {
        &self.owner
    }

    pub fn cursor(&self) -> &P::Cursor {
        &self.cursor
    }
}

impl<P: Property> Clone for Adapter<P> {
    fn clone(&self) -> Self {
        Self {
            owner: Arc::clone(&self.owner),
            cursor: self.cursor.clone(),
        }
    }
}

// Owners compare by identity: two adapters over equal but distinct
// properties are different iterations.
impl<P: Property> PartialEq for Adapter<P> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.owner, &other.owner) && self.cursor == other.cursor
    }
}

impl<P: Property> Iter for Adapter<P> {
    fn has_any(&self) -> bool {
        self.cursor.has_any()
    }

    fn is_iri(&self) -> bool {
        self.cursor.is_iri()
    }

    fn get_iri(&self) -> Option<Url> {
        self.cursor.get_iri()
    }

    fn get_type(&self) -> Option<Value> {
        self.cursor.get_type()
    }

    fn next(&self) -> Box<dyn Iter> {
        Box::new(Adapter {
            owner: Arc::clone(&self.owner),
            cursor: self.cursor.next(),
        })
    }

    fn end(&self) -> Box<dyn Iter> {
        Box::new(Adapter {
            owner: Arc::clone(&self.owner),
            cursor: self.owner.end(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &dyn Iter) -> bool {
        other
            .as_any()
            .downcast_ref::<Adapter<P>>()
            .is_some_and(|other| self == other)
    }
}
