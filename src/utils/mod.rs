//! Shared utilities for iterbridge
//!
//! This module contains the naming helpers used by the registry, the
//! configuration loader and the renderers.

pub mod name_deriver;

pub use name_deriver::{derive_container_name, is_valid_identifier, to_snake_case, ITERATOR_SUFFIX};
