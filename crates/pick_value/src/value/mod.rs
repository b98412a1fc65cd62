//! Runtime values matched by destructuring patterns.
//!
//! # Missing vs Null
//!
//! `Value::Missing` is the sentinel produced by a lookup that found nothing
//! (absent key, index past the end). It is the only value that triggers a
//! binding's default. `Value::Null` is an ordinary value: a key explicitly
//! set to `Null` is present and keeps its value.
//!
//! ## Correct Usage
//!
//! ```text
//! let s = Value::string("🍎");
//! let fruits = Value::list(vec![Value::string("🍎"), Value::string("🍊")]);
//! let user = Value::map([("id", Value::int(0)), ("username", Value::string("jeff"))]);
//! ```

mod heap;

use std::borrow::Cow;
use std::fmt;

pub use heap::Heap;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Character value.
    Char(char),
    /// Explicit "no object" value. Present, so defaults do not apply.
    Null,
    /// The missing sentinel: nothing was found.
    Missing,

    // Heap Types
    /// String value.
    Str(Heap<String>),
    /// Ordered sequence of values.
    List(Heap<Vec<Value>>),
    /// Mapping from string keys to values, in insertion order.
    Map(Heap<Vec<(String, Value)>>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    ///
    /// # Example
    ///
    /// ```text
    /// let empty = Value::list(vec![]);
    /// let ids = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value from key/value pairs.
    ///
    /// Keys keep the order they first appear in. A later pair with the same
    /// key overwrites the value but keeps the original position.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut map: Vec<(String, Value)> = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            match map.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => map.push((key, value)),
            }
        }
        Value::Map(Heap::new(map))
    }
}

// Value Methods

impl Value {
    /// True only for the missing sentinel.
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// True for `Null` and `Missing`: values that cannot be destructured.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Missing)
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Null => "null",
            Value::Missing => "missing",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// The elements of an iterable value, in order.
    ///
    /// Lists yield their items; strings yield one `Char` per character.
    /// Returns `None` for values that are not iterable.
    pub fn elements(&self) -> Option<Cow<'_, [Value]>> {
        match self {
            Value::List(items) => Some(Cow::Borrowed(items.as_slice())),
            Value::Str(s) => Some(Cow::Owned(s.chars().map(Value::Char).collect())),
            _ => None,
        }
    }

    /// Look up a property by key.
    ///
    /// Maps answer their entries. Lists and strings answer decimal indices
    /// and `length`. Everything else, and any absent key, yields `Missing`.
    pub fn property(&self, key: &str) -> Value {
        match self {
            Value::Map(map) => map_entry(map, key).cloned().unwrap_or(Value::Missing),
            Value::List(items) => {
                if key == "length" {
                    return length_value(items.len());
                }
                parse_index(key)
                    .and_then(|i| items.get(i).cloned())
                    .unwrap_or(Value::Missing)
            }
            Value::Str(s) => {
                if key == "length" {
                    return length_value(s.chars().count());
                }
                parse_index(key)
                    .and_then(|i| s.chars().nth(i))
                    .map_or(Value::Missing, Value::Char)
            }
            _ => Value::Missing,
        }
    }

    /// Coerce this value into a property key.
    pub fn to_key(&self) -> Cow<'_, str> {
        match self {
            Value::Str(s) => Cow::Borrowed(s.as_str()),
            Value::Int(n) => Cow::Owned(n.to_string()),
            Value::Float(f) => float_key(*f),
            Value::Bool(b) => Cow::Owned(b.to_string()),
            Value::Char(c) => Cow::Owned(c.to_string()),
            Value::Null => Cow::Borrowed("null"),
            Value::Missing => Cow::Borrowed("undefined"),
            Value::List(items) => {
                let keys: Vec<_> = items.iter().map(|v| v.to_key().into_owned()).collect();
                Cow::Owned(keys.join(","))
            }
            Value::Map(_) => Cow::Borrowed("[object Object]"),
        }
    }

    /// Display value for user output (strings unquoted).
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            Value::Char(c) => c.to_string(),
            _ => self.to_string(),
        }
    }

    /// Check structural equality with another value.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            // Bitwise, so NaN matches itself and 0.0 differs from -0.0
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Missing, Value::Missing) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .all(|(k, va)| map_entry(b, k).is_some_and(|vb| va.equals(vb)))
            }
            _ => false,
        }
    }
}

fn parse_index(key: &str) -> Option<usize> {
    // "01" and "+1" are not canonical indices
    if key == "0" || (!key.starts_with('0') && key.bytes().all(|b| b.is_ascii_digit())) {
        key.parse().ok()
    } else {
        None
    }
}

fn length_value(len: usize) -> Value {
    i64::try_from(len).map_or(Value::Missing, Value::Int)
}

fn map_entry<'a>(map: &'a [(String, Value)], key: &str) -> Option<&'a Value> {
    map.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Number-to-string the way property keys spell it: `NaN`, `Infinity`,
/// and a single unsigned zero.
fn float_key(f: f64) -> Cow<'static, str> {
    if f.is_nan() {
        Cow::Borrowed("NaN")
    } else if f.is_infinite() {
        Cow::Borrowed(if f > 0.0 { "Infinity" } else { "-Infinity" })
    } else if f == 0.0 {
        Cow::Borrowed("0")
    } else {
        Cow::Owned(f.to_string())
    }
}

// Conversions

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Null => write!(f, "Null"),
            Value::Missing => write!(f, "Missing"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Map(map) => {
                write!(f, "Map(")?;
                f.debug_map()
                    .entries(map.iter().map(|(k, v)| (k, v)))
                    .finish()?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Null => write!(f, "null"),
            Value::Missing => write!(f, "undefined"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
