//! Uniform iteration over nominally distinct property iterators, in process
//!
//! The generated units erase iterator types in the target language; this
//! module does the same for Rust callers, driven by the same configuration.
//! Property types are bound once, then [`Dispatcher::begin`] turns any
//! [`Dynamic`] value into a boxed [`Iter`].

mod dispatch;
mod iter;

pub use dispatch::{DispatchError, Dispatcher, DispatcherBuilder, Dynamic, NIL_TYPE_NAME};
pub use iter::{Adapter, Iter, Property, PropertyIterator};
