//! Pick Pattern - declarative destructuring patterns.
//!
//! Patterns are plain values, built from composable fragments and checked
//! once at construction time. A built `Pattern` is immutable and can be
//! reused across any number of extractions.
//!
//! ```text
//! // const [first, second = "🍊", ...remaining] = fruits;
//! let pattern = Pattern::sequence(vec![
//!     bind("first"),
//!     bind("second").or(Value::string("🍊")),
//!     rest("remaining"),
//! ])?;
//!
//! // const { name: username = "John doe", parent: { child: baby } } = obj;
//! let pattern = Pattern::mapping(vec![
//!     field("name").to("username").or(Value::string("John doe")),
//!     field("parent").nested(Pattern::mapping(vec![field("child").to("baby")])?),
//! ])?;
//! ```

mod errors;
mod pattern;

pub use errors::PatternError;
pub use pattern::{
    bind, computed, field, nest, rest, skip, Binding, Element, Field, KeyFn, Pattern,
    Property, PropertyKey, Shape, Slot, Target,
};
