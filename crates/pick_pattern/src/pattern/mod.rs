//! Pattern values and the fragment builders that produce them.
//!
//! # Fragments
//!
//! Sequence patterns are built from `Element`s (`bind`, `skip`, `rest`,
//! `nest`), mapping patterns from `Field`s (`field`, `computed`). Fragments
//! are unchecked; `Pattern::sequence` and `Pattern::mapping` validate them
//! and produce the checked `Shape` the extractor walks.
//!
//! # Rest Placement
//!
//! A built sequence pattern stores its rest name separately from its
//! positional slots, so "rest is last" holds structurally once built.

use std::fmt;
use std::sync::Arc;

use pick_value::{Bindings, Value};

use crate::errors::{rest_not_last, rest_with_default, shape_mismatch, unnamed_computed_key};
use crate::PatternError;

/// Computes a property key at extraction time.
///
/// Receives the bindings produced so far in the current extraction. The
/// returned value is coerced with `Value::to_key`.
pub type KeyFn = Arc<dyn Fn(&Bindings) -> Value + Send + Sync>;

/// Where a selected value goes.
#[derive(Clone, Debug)]
pub enum Target {
    /// Bind the value to a name.
    Name(String),
    /// Destructure the value again with a nested pattern.
    Nested(Pattern),
}

/// A target plus the default used when the selected value is missing.
#[derive(Clone, Debug)]
pub struct Binding {
    target: Target,
    default: Option<Value>,
}

impl Binding {
    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// One positional slot of a built sequence pattern.
#[derive(Clone, Debug)]
pub enum Slot {
    Bind(Binding),
    Skip,
}

/// Key of a mapping property.
#[derive(Clone)]
pub enum PropertyKey {
    Literal(String),
    Computed(KeyFn),
}

impl fmt::Debug for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Literal(key) => write!(f, "{key:?}"),
            PropertyKey::Computed(_) => write!(f, "[computed]"),
        }
    }
}

/// One property of a built mapping pattern.
#[derive(Clone, Debug)]
pub struct Property {
    key: PropertyKey,
    binding: Binding,
}

impl Property {
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }
}

/// The checked structure of a pattern.
#[derive(Clone, Debug)]
pub enum Shape {
    /// `[a, , b = d, ...rest]`
    Sequence {
        slots: Vec<Slot>,
        rest: Option<String>,
    },
    /// `{ k, k: n = d, [expr]: n }`
    Mapping(Vec<Property>),
}

/// A validated destructuring pattern.
#[derive(Clone, Debug)]
pub struct Pattern {
    shape: Shape,
}

// Fragments

/// Unchecked sequence pattern fragment.
#[derive(Clone, Debug)]
pub enum Element {
    Bind(Binding),
    Skip,
    Rest {
        name: String,
        default: Option<Value>,
    },
}

impl Element {
    /// Attach a default, used when the slot is missing.
    ///
    /// Has no effect on `skip()`. A default on `rest()` is rejected when the
    /// pattern is built.
    #[must_use]
    pub fn or(self, value: impl Into<Value>) -> Self {
        match self {
            Element::Bind(binding) => Element::Bind(Binding {
                default: Some(value.into()),
                ..binding
            }),
            Element::Skip => Element::Skip,
            Element::Rest { name, .. } => Element::Rest {
                name,
                default: Some(value.into()),
            },
        }
    }
}

/// Unchecked mapping pattern fragment.
#[derive(Clone, Debug)]
pub struct Field {
    key: PropertyKey,
    target: Option<Target>,
    default: Option<Value>,
}

impl Field {
    /// Bind the property under `name` instead of its key.
    #[must_use]
    pub fn to(self, name: impl Into<String>) -> Self {
        Field {
            target: Some(Target::Name(name.into())),
            ..self
        }
    }

    /// Destructure the property's value with `pattern`.
    #[must_use]
    pub fn nested(self, pattern: Pattern) -> Self {
        Field {
            target: Some(Target::Nested(pattern)),
            ..self
        }
    }

    /// Attach a default, used when the property is missing.
    #[must_use]
    pub fn or(self, value: impl Into<Value>) -> Self {
        Field {
            default: Some(value.into()),
            ..self
        }
    }
}

/// Bind the next position to `name`.
pub fn bind(name: impl Into<String>) -> Element {
    Element::Bind(Binding {
        target: Target::Name(name.into()),
        default: None,
    })
}

/// Destructure the next position with a nested pattern.
pub fn nest(pattern: Pattern) -> Element {
    Element::Bind(Binding {
        target: Target::Nested(pattern),
        default: None,
    })
}

/// Consume the next position without binding it.
pub fn skip() -> Element {
    Element::Skip
}

/// Collect every remaining position into a list bound to `name`.
pub fn rest(name: impl Into<String>) -> Element {
    Element::Rest {
        name: name.into(),
        default: None,
    }
}

/// Select property `key`, bound under the same name unless renamed.
pub fn field(key: impl Into<String>) -> Field {
    Field {
        key: PropertyKey::Literal(key.into()),
        target: None,
        default: None,
    }
}

/// Select the property whose key `key_fn` computes at extraction time.
///
/// Must be given a name with `.to(name)` or `.nested(pattern)`.
pub fn computed<F>(key_fn: F) -> Field
where
    F: Fn(&Bindings) -> Value + Send + Sync + 'static,
{
    Field {
        key: PropertyKey::Computed(Arc::new(key_fn)),
        target: None,
        default: None,
    }
}

// Construction

impl Pattern {
    /// Build a sequence pattern from elements, in order.
    pub fn sequence(elements: impl IntoIterator<Item = Element>) -> Result<Self, PatternError> {
        let mut slots = Vec::new();
        let mut rest: Option<String> = None;

        for (position, element) in elements.into_iter().enumerate() {
            if let Some(name) = &rest {
                return Err(rest_not_last(name, position - 1));
            }
            match element {
                Element::Bind(binding) => slots.push(Slot::Bind(binding)),
                Element::Skip => slots.push(Slot::Skip),
                Element::Rest { name, default } => {
                    if default.is_some() {
                        return Err(rest_with_default(&name));
                    }
                    rest = Some(name);
                }
            }
        }

        Ok(Pattern {
            shape: Shape::Sequence { slots, rest },
        })
    }

    /// Build a mapping pattern from fields, in order.
    pub fn mapping(fields: impl IntoIterator<Item = Field>) -> Result<Self, PatternError> {
        let mut properties = Vec::new();

        for (position, field) in fields.into_iter().enumerate() {
            let target = match (field.target, &field.key) {
                (Some(target), _) => target,
                // Shorthand: `{ id }` binds `id`
                (None, PropertyKey::Literal(key)) => Target::Name(key.clone()),
                (None, PropertyKey::Computed(_)) => return Err(unnamed_computed_key(position)),
            };
            properties.push(Property {
                key: field.key,
                binding: Binding {
                    target,
                    default: field.default,
                },
            });
        }

        Ok(Pattern {
            shape: Shape::Mapping(properties),
        })
    }

    /// Compose two patterns of the same shape, `self` first.
    pub fn concat(self, other: Pattern) -> Result<Self, PatternError> {
        let left = self.kind();
        let right = other.kind();
        let shape = match (self.shape, other.shape) {
            (
                Shape::Sequence { mut slots, rest },
                Shape::Sequence {
                    slots: more,
                    rest: tail,
                },
            ) => {
                if let Some(name) = rest {
                    if !more.is_empty() || tail.is_some() {
                        return Err(rest_not_last(&name, slots.len()));
                    }
                    Shape::Sequence {
                        slots,
                        rest: Some(name),
                    }
                } else {
                    slots.extend(more);
                    Shape::Sequence { slots, rest: tail }
                }
            }
            (Shape::Mapping(mut properties), Shape::Mapping(more)) => {
                properties.extend(more);
                Shape::Mapping(properties)
            }
            _ => return Err(shape_mismatch(left, right)),
        };
        Ok(Pattern { shape })
    }
}

// Inspection

impl Pattern {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// `"sequence"` or `"mapping"`.
    pub fn kind(&self) -> &'static str {
        match self.shape {
            Shape::Sequence { .. } => "sequence",
            Shape::Mapping(_) => "mapping",
        }
    }

    /// True when the pattern binds nothing and consumes nothing.
    pub fn is_empty(&self) -> bool {
        match &self.shape {
            Shape::Sequence { slots, rest } => slots.is_empty() && rest.is_none(),
            Shape::Mapping(properties) => properties.is_empty(),
        }
    }

    /// Every name this pattern binds, nested patterns included, in order.
    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match &self.shape {
            Shape::Sequence { slots, rest } => {
                for slot in slots {
                    if let Slot::Bind(binding) = slot {
                        binding.target.collect_names(names);
                    }
                }
                if let Some(name) = rest {
                    names.push(name);
                }
            }
            Shape::Mapping(properties) => {
                for property in properties {
                    property.binding.target.collect_names(names);
                }
            }
        }
    }
}

impl Target {
    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Target::Name(name) => names.push(name),
            Target::Nested(pattern) => pattern.collect_names(names),
        }
    }
}
