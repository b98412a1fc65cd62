//! The extractor: walks a pattern against a source value.
//!
//! Bindings are resolved in pattern order. Nested patterns write into the
//! same output as their parent, so nested names are never prefixed. Output
//! is built in a scratch `Bindings` and only returned on success.

use std::borrow::Cow;

use pick_pattern::{Binding, Pattern, Property, PropertyKey, Shape, Slot, Target};
use pick_value::{Bindings, Value};

use crate::errors::{not_iterable, source_missing};
use crate::path::Path;
use crate::stack::ensure_sufficient_stack;
use crate::ExtractError;

/// Destructure `source` with `pattern`.
///
/// Fails with `SourceMissing` when a non-empty pattern meets `Null` or
/// `Missing` (at any depth), and with `NotIterable` when a sequence pattern
/// meets a value that has no elements.
#[tracing::instrument(level = "debug", skip_all, fields(pattern = pattern.kind()))]
pub fn extract(source: &Value, pattern: &Pattern) -> Result<Bindings, ExtractError> {
    let mut out = Bindings::new();
    extract_into(source, pattern, &mut Path::root(), &mut out)?;
    Ok(out)
}

/// Destructure every element of `items`, as in `for (const { id } of users)`.
///
/// The first failing element aborts the loop; its index is in the error path.
#[tracing::instrument(level = "debug", skip_all, fields(pattern = pattern.kind()))]
pub fn extract_each(items: &Value, pattern: &Pattern) -> Result<Vec<Bindings>, ExtractError> {
    let mut path = Path::root();
    let Some(elements) = items.elements() else {
        return Err(not_iterable(&path, items));
    };

    let mut results = Vec::with_capacity(elements.len());
    for (index, item) in elements.iter().enumerate() {
        let mut out = Bindings::new();
        path.push_index(index);
        extract_into(item, pattern, &mut path, &mut out)?;
        path.pop();
        results.push(out);
    }
    Ok(results)
}

/// Destructure a call's arguments with a parameter pattern.
///
/// The arguments form a sequence source, so `params` is normally a sequence
/// pattern with one element per parameter.
pub fn extract_args(args: &[Value], params: &Pattern) -> Result<Bindings, ExtractError> {
    extract(&Value::list(args.to_vec()), params)
}

fn extract_into(
    source: &Value,
    pattern: &Pattern,
    path: &mut Path,
    out: &mut Bindings,
) -> Result<(), ExtractError> {
    if pattern.is_empty() {
        return Ok(());
    }
    if source.is_nullish() {
        return Err(source_missing(path, source));
    }

    ensure_sufficient_stack(|| match pattern.shape() {
        Shape::Sequence { slots, rest } => {
            extract_sequence(source, slots, rest.as_deref(), path, out)
        }
        Shape::Mapping(properties) => extract_mapping(source, properties, path, out),
    })
}

fn extract_sequence(
    source: &Value,
    slots: &[Slot],
    rest: Option<&str>,
    path: &mut Path,
    out: &mut Bindings,
) -> Result<(), ExtractError> {
    let Some(elements) = source.elements() else {
        return Err(not_iterable(path, source));
    };

    for (index, slot) in slots.iter().enumerate() {
        let Slot::Bind(binding) = slot else {
            tracing::trace!(%path, index, "skip");
            continue;
        };
        let value = elements.get(index).cloned().unwrap_or(Value::Missing);
        path.push_index(index);
        bind(binding, value, path, out)?;
        path.pop();
    }

    if let Some(name) = rest {
        let remaining = elements.get(slots.len()..).map_or_else(Vec::new, <[Value]>::to_vec);
        tracing::trace!(%path, name, count = remaining.len(), "rest");
        out.insert(name, Value::list(remaining));
    }
    Ok(())
}

fn extract_mapping(
    source: &Value,
    properties: &[Property],
    path: &mut Path,
    out: &mut Bindings,
) -> Result<(), ExtractError> {
    for property in properties {
        let key: Cow<'_, str> = match property.key() {
            PropertyKey::Literal(key) => Cow::Borrowed(key.as_str()),
            PropertyKey::Computed(key_fn) => {
                let key = key_fn(&*out).to_key().into_owned();
                tracing::trace!(%path, key = %key, "computed key");
                Cow::Owned(key)
            }
        };
        let value = source.property(&key);
        path.push_key(&key);
        bind(property.binding(), value, path, out)?;
        path.pop();
    }
    Ok(())
}

/// Apply the default if `value` is missing, then bind or recurse.
fn bind(
    binding: &Binding,
    value: Value,
    path: &mut Path,
    out: &mut Bindings,
) -> Result<(), ExtractError> {
    let value = match binding.default_value() {
        Some(default) if value.is_missing() => {
            tracing::debug!(%path, "missing value, using default");
            default.clone()
        }
        _ => value,
    };

    match binding.target() {
        Target::Name(name) => {
            tracing::trace!(%path, name = %name, %value, "bind");
            out.insert(name.as_str(), value);
            Ok(())
        }
        Target::Nested(pattern) => extract_into(&value, pattern, path, out),
    }
}
