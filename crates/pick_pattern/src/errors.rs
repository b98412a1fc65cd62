//! Pattern construction errors.
//!
//! Every structural problem is caught when a pattern is built, so a
//! `Pattern` value that exists is always well-formed.

/// A structurally invalid pattern.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A rest element is followed by further elements.
    #[error("rest element must be last, but `...{name}` is at position {position}")]
    RestNotLast { name: String, position: usize },

    /// A rest element was given a default value.
    #[error("rest element `...{name}` cannot have a default value")]
    RestWithDefault { name: String },

    /// A computed key has no name to bind its value to.
    #[error("computed key at position {position} must be bound with `.to(name)`")]
    UnnamedComputedKey { position: usize },

    /// Concatenating a sequence pattern with a mapping pattern.
    #[error("cannot concatenate a {left} pattern with a {right} pattern")]
    ShapeMismatch {
        left: &'static str,
        right: &'static str,
    },
}

#[cold]
pub(crate) fn rest_not_last(name: &str, position: usize) -> PatternError {
    PatternError::RestNotLast {
        name: name.to_string(),
        position,
    }
}

#[cold]
pub(crate) fn rest_with_default(name: &str) -> PatternError {
    PatternError::RestWithDefault {
        name: name.to_string(),
    }
}

#[cold]
pub(crate) fn unnamed_computed_key(position: usize) -> PatternError {
    PatternError::UnnamedComputedKey { position }
}

#[cold]
pub(crate) fn shape_mismatch(left: &'static str, right: &'static str) -> PatternError {
    PatternError::ShapeMismatch { left, right }
}
