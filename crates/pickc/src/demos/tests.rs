#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn run(name: &str, verbose: bool) -> Vec<String> {
    let demo = demos().iter().find(|d| d.name == name).unwrap();
    demo.run(verbose).unwrap().lines().to_vec()
}

#[test]
fn test_every_demo_runs() {
    for demo in demos() {
        let transcript = demo.run(false);
        assert!(transcript.is_ok(), "demo {} failed: {transcript:?}", demo.name);
    }
}

#[test]
fn test_demo_names_are_unique() {
    let mut names: Vec<_> = demos().iter().map(|d| d.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), demos().len());
}

#[test]
fn test_arrays() {
    assert_eq!(
        run("arrays", false),
        vec![
            "horse = \"🐎\"",
            "chicken = \"🐔\"",
            "dog = \"🐶\"",
            "pig = \"🐷\"",
        ]
    );
}

#[test]
fn test_rest() {
    assert_eq!(
        run("rest", false),
        vec![
            "first = \"🍎\"",
            "second = \"🍊\"",
            "remaining = [\"🍌\", \"🍓\"]",
        ]
    );
}

#[test]
fn test_defaults_fill_short_list() {
    let lines = run("defaults", false);
    assert_eq!(
        &lines[3..],
        &[
            "first2 = \"🍎\"".to_string(),
            "second2 = \"🍊\"".to_string(),
            "remaining2 = []".to_string(),
        ]
    );
}

#[test]
fn test_rename() {
    assert_eq!(
        run("rename", false),
        vec!["username = \"Francisco\"", "userAge = 31"]
    );
}

#[test]
fn test_loops() {
    assert_eq!(run("loops", false), vec!["id = 1", "id = 2", "id = 3"]);
}

#[test]
fn test_function_args() {
    assert_eq!(run("function-args", false), vec!["hi jeff"]);
}

#[test]
fn test_swap() {
    assert_eq!(
        run("swap", false),
        vec![
            "before: a = \"foo\", b = \"bar\"",
            "after: a = \"bar\", b = \"foo\"",
        ]
    );
}

#[test]
fn test_swap_pair_shows_missing_values() {
    let (a, b) = swap_pair(&Value::Missing, &Value::string("bar")).unwrap();
    assert_eq!(a, Value::string("bar"));
    assert_eq!(b, Value::Missing);
    assert_eq!(format!("a = {a}, b = {b}"), "a = \"bar\", b = undefined");
}

#[test]
fn test_regex() {
    assert_eq!(
        run("regex", false),
        vec!["fee = \"fee \"", "fi = \"fi \"", "fo = \"fo \""]
    );
}

#[test]
fn test_dynamic_keys() {
    assert_eq!(run("dynamic-keys", false), vec!["DynamicApple = \"🍍\""]);
}

#[test]
fn test_verbose_lists_pattern_names() {
    let lines = run("nested", true);
    assert_eq!(
        lines,
        vec!["pattern (mapping) binds: baby", "baby = \"👨‍🍼\""]
    );
}
