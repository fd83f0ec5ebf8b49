use crate::filter::{Filter, FilterLogic};
use serde_json::{Value, json};

/// Combine the quick-filter predicate and the manual predicate into one
/// query predicate.
///
/// Both empty yields no filter; exactly one non-empty yields that one
/// unchanged; both non-empty are wrapped under `_and` or `_or` according
/// to the selected logic.
#[must_use]
pub fn merge_filters(quick: &Filter, manual: &Filter, logic: FilterLogic) -> Option<Value> {
    let mut parts: Vec<Value> = Vec::new();

    if !quick.is_empty() {
        parts.push(Value::Object(quick.clone()));
    }
    if !manual.is_empty() {
        parts.push(Value::Object(manual.clone()));
    }

    match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => Some(json!({ logic.wrapper(): parts })),
    }
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
