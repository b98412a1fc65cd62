//! Property-based tests for the extractor.
//!
//! Generated sequences and keys check the positional, default, rest, swap
//! and computed-key laws against arbitrary inputs.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use pick_extract::{extract, ExtractError};
use pick_pattern::{bind, computed, rest, skip, Element, Pattern};
use pick_value::Value;
use proptest::prelude::*;

// -- Strategies --

/// A non-missing leaf value.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::int),
        any::<f64>().prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
        "[a-z🍎🍊🍌🍓]{0,6}".prop_map(Value::string),
        Just(Value::Null),
    ]
}

fn sequence_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(leaf_strategy(), 0..12)
}

/// Skips up to `index`, then binds `name` there.
fn bind_at(index: usize, name: &str) -> Vec<Element> {
    let mut elements: Vec<Element> = (0..index).map(|_| skip()).collect();
    elements.push(bind(name));
    elements
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// A bind at an in-range index yields exactly that element.
    #[test]
    fn prop_positional_bind_in_range(items in sequence_strategy(), seed in any::<usize>()) {
        prop_assume!(!items.is_empty());
        let index = seed % items.len();
        let pattern = Pattern::sequence(bind_at(index, "v")).unwrap();
        let out = extract(&Value::list(items.clone()), &pattern).unwrap();
        prop_assert_eq!(out.get("v"), Some(&items[index]));
    }

    /// A bind past the end yields its default.
    #[test]
    fn prop_default_past_the_end(items in sequence_strategy(), extra in 0usize..4, default in leaf_strategy()) {
        let index = items.len() + extra;
        let mut elements: Vec<Element> = (0..index).map(|_| skip()).collect();
        elements.push(bind("v").or(default.clone()));
        let pattern = Pattern::sequence(elements).unwrap();
        let out = extract(&Value::list(items), &pattern).unwrap();
        prop_assert_eq!(out.get("v"), Some(&default));
    }

    /// Rest after `k` binds is the suffix from `k`.
    #[test]
    fn prop_rest_is_suffix(items in sequence_strategy(), k in 0usize..14) {
        let mut elements: Vec<Element> = (0..k).map(|i| bind(format!("v{i}"))).collect();
        elements.push(rest("remaining"));
        let pattern = Pattern::sequence(elements).unwrap();
        let out = extract(&Value::list(items.clone()), &pattern).unwrap();
        let expected = items.get(k..).map_or_else(Vec::new, <[Value]>::to_vec);
        prop_assert_eq!(out.get("remaining"), Some(&Value::list(expected)));
    }

    /// Destructuring `[b, a]` into `[x, y]` twice restores `(a, b)`.
    #[test]
    fn prop_swap_is_an_involution(a in leaf_strategy(), b in leaf_strategy()) {
        let pattern = Pattern::sequence(vec![bind("x"), bind("y")]).unwrap();
        let once = extract(&Value::list(vec![b.clone(), a.clone()]), &pattern).unwrap();
        let (x, y) = (once.get("x").cloned().unwrap(), once.get("y").cloned().unwrap());
        let twice = extract(&Value::list(vec![y, x]), &pattern).unwrap();
        prop_assert_eq!(twice.get("x"), Some(&a));
        prop_assert_eq!(twice.get("y"), Some(&b));
    }

    /// A computed key finds its property whatever the key text is.
    #[test]
    fn prop_computed_key_any_text(key in "\\PC{0,16}") {
        let source = Value::map([(key.clone(), Value::string("🍍"))]);
        let pattern = Pattern::mapping(vec![
            computed(move |_| Value::string(key.clone())).to("v"),
        ]).unwrap();
        let out = extract(&source, &pattern).unwrap();
        prop_assert_eq!(out.get("v"), Some(&Value::string("🍍")));
    }

    /// Any non-empty pattern over Null fails without output.
    #[test]
    fn prop_null_source_fails(n in 1usize..6) {
        let pattern = Pattern::sequence((0..n).map(|i| bind(format!("v{i}")))).unwrap();
        let is_missing_source = matches!(
            extract(&Value::Null, &pattern),
            Err(ExtractError::SourceMissing { .. })
        );
        prop_assert!(is_missing_source);
    }
}
