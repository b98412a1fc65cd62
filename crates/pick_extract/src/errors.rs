//! Extraction errors.
//!
//! Only a source that cannot be destructured at all is an error. A missing
//! key or position binds `Value::Missing` (or the default) instead.

use pick_value::Value;

use crate::path::Path;

/// Extraction failed before producing any output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// A non-empty pattern was applied to `Null` or `Missing`.
    #[error("cannot destructure {found} at `{path}`")]
    SourceMissing { path: String, found: &'static str },

    /// A sequence pattern was applied to a value with no elements.
    #[error("cannot destructure {type_name} at `{path}` as a sequence: value is not iterable")]
    NotIterable {
        path: String,
        type_name: &'static str,
    },
}

#[cold]
pub(crate) fn source_missing(path: &Path, source: &Value) -> ExtractError {
    ExtractError::SourceMissing {
        path: path.to_string(),
        found: if source.is_missing() {
            "undefined"
        } else {
            "null"
        },
    }
}

#[cold]
pub(crate) fn not_iterable(path: &Path, source: &Value) -> ExtractError {
    ExtractError::NotIterable {
        path: path.to_string(),
        type_name: source.type_name(),
    }
}
