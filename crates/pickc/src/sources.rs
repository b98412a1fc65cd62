//! Sample sources the demos destructure.

use pick_value::Value;
use rand::Rng;
use regex::Regex;

const KEY_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const KEY_LEN: usize = 11;

/// Every match of `re` in `text`, as a list of strings.
///
/// No match at all yields `Null`, so destructuring the result fails the
/// same way destructuring any absent source does.
pub fn match_all(re: &Regex, text: &str) -> Value {
    let matches: Vec<_> = re
        .find_iter(text)
        .map(|m| Value::string(m.as_str()))
        .collect();
    if matches.is_empty() {
        Value::Null
    } else {
        Value::list(matches)
    }
}

/// A random lowercase base-36 property key.
pub fn random_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..KEY_LEN)
        .map(|_| char::from(KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())]))
        .collect()
}
