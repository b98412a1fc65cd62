//! The walkthrough: one demo per destructuring feature.
//!
//! Demos run in the order listed by `demos()`. Each builds its patterns up
//! front, so a malformed pattern fails before anything is extracted.

use pick_extract::{extract, extract_args, extract_each, ExtractError};
use pick_pattern::{bind, computed, field, nest, rest, skip, Pattern, PatternError};
use pick_value::{Bindings, Value};
use regex::Regex;

use crate::sources::{match_all, random_key};

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),
}

type DemoFn = fn(&mut Transcript) -> Result<(), DemoError>;

/// A named walkthrough step.
pub struct Demo {
    pub name: &'static str,
    pub summary: &'static str,
    run: DemoFn,
}

impl Demo {
    #[tracing::instrument(level = "debug", skip_all, fields(demo = self.name))]
    pub fn run(&self, verbose: bool) -> Result<Transcript, DemoError> {
        let mut transcript = Transcript {
            lines: Vec::new(),
            verbose,
        };
        (self.run)(&mut transcript)?;
        Ok(transcript)
    }
}

/// Output lines recorded by a demo.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
    verbose: bool,
}

impl Transcript {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn bindings(&mut self, bindings: &Bindings) {
        for (name, value) in bindings.iter() {
            self.lines.push(format!("{name} = {value}"));
        }
    }

    fn pattern(&mut self, pattern: &Pattern) {
        if self.verbose {
            let names = pattern.names().join(", ");
            self.lines
                .push(format!("pattern ({}) binds: {names}", pattern.kind()));
        }
    }

    /// Extract and record every binding.
    fn extract(&mut self, source: &Value, pattern: &Pattern) -> Result<Bindings, DemoError> {
        self.pattern(pattern);
        let bindings = extract(source, pattern)?;
        self.bindings(&bindings);
        Ok(bindings)
    }
}

static DEMOS: &[Demo] = &[
    Demo {
        name: "arrays",
        summary: "bind each position of a list to a name",
        run: arrays,
    },
    Demo {
        name: "skip",
        summary: "leave positions out with empty slots",
        run: skipping,
    },
    Demo {
        name: "rest",
        summary: "collect the remaining positions into a list",
        run: remainder,
    },
    Demo {
        name: "defaults",
        summary: "fall back to a default when a position is missing",
        run: defaults,
    },
    Demo {
        name: "rename",
        summary: "bind object keys under new names, with defaults",
        run: rename,
    },
    Demo {
        name: "quoted-keys",
        summary: "rename keys that are not valid identifiers",
        run: quoted_keys,
    },
    Demo {
        name: "nested",
        summary: "reach into an object within an object",
        run: nested,
    },
    Demo {
        name: "loops",
        summary: "destructure each element of a list",
        run: loops,
    },
    Demo {
        name: "function-args",
        summary: "destructure a function's object parameter",
        run: function_args,
    },
    Demo {
        name: "swap",
        summary: "swap two variables without a temporary",
        run: swap,
    },
    Demo {
        name: "regex",
        summary: "name the matches of a regular expression",
        run: regex_matches,
    },
    Demo {
        name: "dynamic-keys",
        summary: "select a property whose key is only known at runtime",
        run: dynamic_keys,
    },
];

/// Every demo, in walkthrough order.
pub fn demos() -> &'static [Demo] {
    DEMOS
}

fn strings(items: &[&str]) -> Value {
    Value::list(items.iter().map(|s| Value::string(*s)).collect())
}

fn fruits() -> Value {
    strings(&["🍎", "🍊", "🍌", "🍓"])
}

fn arrays(t: &mut Transcript) -> Result<(), DemoError> {
    let animals = strings(&["🐎", "🐔", "🐶", "🐷"]);
    let pattern = Pattern::sequence(vec![
        bind("horse"),
        bind("chicken"),
        bind("dog"),
        bind("pig"),
    ])?;
    t.extract(&animals, &pattern)?;
    Ok(())
}

fn skipping(t: &mut Transcript) -> Result<(), DemoError> {
    let pattern = Pattern::sequence(vec![skip(), skip(), skip(), bind("apple")])?;
    t.extract(&fruits(), &pattern)?;
    Ok(())
}

fn remainder(t: &mut Transcript) -> Result<(), DemoError> {
    let pattern = Pattern::sequence(vec![bind("first"), bind("second"), rest("remaining")])?;
    t.extract(&fruits(), &pattern)?;
    Ok(())
}

fn defaults(t: &mut Transcript) -> Result<(), DemoError> {
    let pattern = Pattern::sequence(vec![
        bind("first2").or("🍐"),
        bind("second2").or("🍊"),
        rest("remaining2"),
    ])?;
    t.extract(&fruits(), &pattern)?;
    t.extract(&strings(&["🍎"]), &pattern)?;
    Ok(())
}

fn rename(t: &mut Transcript) -> Result<(), DemoError> {
    let obj = Value::map([("name", Value::string("Francisco")), ("age", Value::int(31))]);
    let pattern = Pattern::mapping(vec![
        field("name").to("username").or("John doe"),
        field("age").to("userAge").or("18"),
    ])?;
    t.extract(&obj, &pattern)?;
    Ok(())
}

fn quoted_keys(t: &mut Transcript) -> Result<(), DemoError> {
    let obj = Value::map([
        ("kebab-case", Value::string("🍔")),
        ("banana", Value::string("🍌")),
        ("pepper", Value::string("🌶")),
    ]);
    let pattern = Pattern::mapping(vec![field("kebab-case").to("hamburguer")])?;
    t.extract(&obj, &pattern)?;
    Ok(())
}

fn nested(t: &mut Transcript) -> Result<(), DemoError> {
    let obj = Value::map([("parent", Value::map([("child", Value::string("👨‍🍼"))]))]);
    let child = Pattern::mapping(vec![field("child").to("baby")])?;
    let pattern = Pattern::mapping(vec![field("parent").nested(child)])?;
    t.extract(&obj, &pattern)?;
    Ok(())
}

fn loops(t: &mut Transcript) -> Result<(), DemoError> {
    let users = Value::list(
        (1..=3)
            .map(|id| Value::map([("id", Value::int(id))]))
            .collect(),
    );
    let pattern = Pattern::mapping(vec![field("id")])?;
    t.pattern(&pattern);
    for bindings in extract_each(&users, &pattern)? {
        t.bindings(&bindings);
    }
    Ok(())
}

fn function_args(t: &mut Transcript) -> Result<(), DemoError> {
    let user = Value::map([("id", Value::int(0)), ("username", Value::string("jeff"))]);
    let params = Pattern::sequence(vec![nest(Pattern::mapping(vec![
        field("id"),
        field("username"),
    ])?)])?;
    t.pattern(&params);
    let args = extract_args(&[user], &params)?;
    let username = args.get("username").map_or_else(String::new, Value::display_value);
    t.line(format!("hi {username}"));
    Ok(())
}

fn swap(t: &mut Transcript) -> Result<(), DemoError> {
    let (a, b) = (Value::string("foo"), Value::string("bar"));
    t.line(format!("before: a = {a}, b = {b}"));
    let (a, b) = swap_pair(&a, &b)?;
    t.line(format!("after: a = {a}, b = {b}"));
    Ok(())
}

/// Rebind `(a, b)` by destructuring `[b, a]`.
fn swap_pair(a: &Value, b: &Value) -> Result<(Value, Value), DemoError> {
    let pattern = Pattern::sequence(vec![bind("a"), bind("b")])?;
    let swapped = extract(&Value::list(vec![b.clone(), a.clone()]), &pattern)?;
    let binding = |name: &str| swapped.get(name).cloned().unwrap_or(Value::Missing);
    Ok((binding("a"), binding("b")))
}

fn regex_matches(t: &mut Transcript) -> Result<(), DemoError> {
    let re = Regex::new(r"\w+\s")?;
    let pattern = Pattern::sequence(vec![bind("fee"), bind("fi"), bind("fo")])?;
    t.extract(&match_all(&re, "fee fi fo fum"), &pattern)?;
    Ok(())
}

fn dynamic_keys(t: &mut Transcript) -> Result<(), DemoError> {
    let random = random_key(&mut rand::thread_rng());
    let obj = Value::map([(random.clone(), Value::string("🍍"))]);
    let pattern =
        Pattern::mapping(vec![computed(move |_| Value::string(random.clone())).to("DynamicApple")])?;
    t.extract(&obj, &pattern)?;
    Ok(())
}

#[cfg(test)]
mod tests;
