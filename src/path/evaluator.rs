//! Resolves parsed property paths against `serde_json::Value` trees.

use serde_json::Value;

use super::ast::{PropertyPath, Segment};
use super::error::PathError;

/// Walks property paths over a borrowed value tree.
pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Resolves `path` against the root, one segment at a time.
    ///
    /// A miss anywhere along the walk resolves to `None`: an absent member,
    /// an out-of-range or non-numeric array index, or a scalar in the middle
    /// of the path.
    pub fn get(&self, path: &PropertyPath) -> Option<&'a Value> {
        let mut current = self.root;
        for segment in path {
            current = step(current, segment)?;
        }
        Some(current)
    }
}

/// Parses `path` and resolves it against `root` in one call.
///
/// Parse failure is an error; a resolution miss is `Ok(None)`.
pub fn get<'v>(root: &'v Value, path: &str) -> Result<Option<&'v Value>, PathError> {
    let path = PropertyPath::parse(path)?;
    Ok(Evaluator::new(root).get(&path))
}

/// Mutable counterpart of [`get`], for in-place updates.
pub fn get_mut<'v>(root: &'v mut Value, path: &str) -> Result<Option<&'v mut Value>, PathError> {
    let path = PropertyPath::parse(path)?;
    let mut current = root;
    for segment in &path {
        current = match step_mut(current, segment) {
            Some(next) => next,
            None => return Ok(None),
        };
    }
    Ok(Some(current))
}

fn step<'v>(value: &'v Value, segment: &Segment) -> Option<&'v Value> {
    // An empty name means the bracket applies to the current value itself,
    // as in a leading `[0]` segment.
    let named = if segment.name().is_empty() {
        value
    } else {
        value.as_object()?.get(segment.name())?
    };
    match segment.index() {
        Some(idx) => index_into(named, idx),
        None => Some(named),
    }
}

fn step_mut<'v>(value: &'v mut Value, segment: &Segment) -> Option<&'v mut Value> {
    let named = if segment.name().is_empty() {
        value
    } else {
        value.as_object_mut()?.get_mut(segment.name())?
    };
    match segment.index() {
        Some(idx) => index_into_mut(named, idx),
        None => Some(named),
    }
}

fn index_into<'v>(value: &'v Value, index: &str) -> Option<&'v Value> {
    match value {
        Value::Array(items) => items.get(normalize_index(index, items.len())?),
        Value::Object(map) => map.get(index),
        _ => None,
    }
}

fn index_into_mut<'v>(value: &'v mut Value, index: &str) -> Option<&'v mut Value> {
    match value {
        Value::Array(items) => {
            let idx = normalize_index(index, items.len())?;
            items.get_mut(idx)
        }
        Value::Object(map) => map.get_mut(index),
        _ => None,
    }
}

/// Resolves a bracket index against an array: numeric, with negative values
/// counting back from the end.
fn normalize_index(index: &str, len: usize) -> Option<usize> {
    let idx = index.parse::<isize>().ok()?;
    let normalized = if idx < 0 { len as isize + idx } else { idx };
    if normalized >= 0 && (normalized as usize) < len {
        Some(normalized as usize)
    } else {
        None
    }
}
