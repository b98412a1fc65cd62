//! Pick Value - runtime values for the pick destructuring library.
//!
//! This crate provides:
//! - The runtime value domain (`Value`) that patterns are matched against
//! - The missing sentinel (`Value::Missing`), distinct from `Value::Null`
//! - Property-key coercion used by key and computed-key lookups
//! - `Bindings`, the ordered name-to-value output of an extraction
//!
//! # Heap Values
//!
//! Strings, lists and maps are shared through `Heap<T>`, an `Arc` wrapper
//! with a private constructor. Extraction clones values freely without
//! copying their contents.

mod bindings;
mod value;

pub use bindings::Bindings;
pub use value::{Heap, Value};
