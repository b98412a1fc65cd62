//! Pick Extract - structured extraction of values by pattern.
//!
//! This crate provides:
//! - `extract`: destructure one source value with a pattern
//! - `extract_each`: loop destructuring over an iterable source
//! - `extract_args`: function-parameter destructuring over an argument list
//! - `ExtractError`, raised when a source cannot be destructured at all
//!
//! Absent keys and out-of-range positions are not errors: they bind the
//! binding's default, or `Value::Missing` when there is none.

mod errors;
mod extract;
mod path;
mod stack;

pub use errors::ExtractError;
pub use extract::{extract, extract_args, extract_each};
