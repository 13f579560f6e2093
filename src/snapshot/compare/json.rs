//! JSON comparison
//!
//! Object key order is irrelevant, array order is not. Integers and floats
//! with the same value are equal.

use std::fs;
use std::path::Path;

use serde_json::{Number, Value};

use crate::error::{HarnessError, Result};
use crate::settings::json_kind;

fn read(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| HarnessError::json(path, e))
}

pub(super) fn compare_json(actual: &Path, expected: &Path) -> Result<()> {
    let got = read(actual)?;
    let want = read(expected)?;

    match first_difference(&got, &want, String::new()) {
        Some(detail) => Err(HarnessError::mismatch(expected, detail)),
        None => Ok(()),
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a == b {
        return true;
    }
    if a.is_f64() || b.is_f64() {
        return a.as_f64().zip(b.as_f64()).is_some_and(|(x, y)| x == y);
    }
    false
}

/// Describe the first place where `got` differs from `want`, if any
///
/// `at` is a JSON pointer to the values being compared.
pub(crate) fn first_difference(got: &Value, want: &Value, at: String) -> Option<String> {
    let location = if at.is_empty() { "<root>".to_string() } else { at.clone() };

    match (got, want) {
        (Value::Number(g), Value::Number(w)) => {
            (!numbers_equal(g, w)).then(|| format!("at {location}: expected {w}, found {g}"))
        },
        (Value::Object(g), Value::Object(w)) => {
            let mut missing: Vec<&String> = w.keys().filter(|k| !g.contains_key(*k)).collect();
            let mut unexpected: Vec<&String> = g.keys().filter(|k| !w.contains_key(*k)).collect();
            if !missing.is_empty() || !unexpected.is_empty() {
                missing.sort();
                unexpected.sort();
                return Some(format!(
                    "at {location}: keys differ (missing: {missing:?}, unexpected: {unexpected:?})"
                ));
            }
            let mut keys: Vec<&String> = w.keys().collect();
            keys.sort();
            keys.into_iter()
                .find_map(|k| first_difference(&g[k.as_str()], &w[k.as_str()], format!("{at}/{k}")))
        },
        (Value::Array(g), Value::Array(w)) => {
            if g.len() != w.len() {
                return Some(format!(
                    "at {location}: expected {} element(s), found {}",
                    w.len(),
                    g.len()
                ));
            }
            g.iter()
                .zip(w)
                .enumerate()
                .find_map(|(i, (g, w))| first_difference(g, w, format!("{at}/{i}")))
        },
        _ if std::mem::discriminant(got) == std::mem::discriminant(want) => {
            (got != want).then(|| format!("at {location}: expected {want}, found {got}"))
        },
        _ => Some(format!(
            "at {location}: expected {}, found {}",
            json_kind(want),
            json_kind(got)
        )),
    }
}
