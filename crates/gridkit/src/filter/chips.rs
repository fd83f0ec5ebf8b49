//! Displayable chips for applied filters. Chip text is the only
//! user-facing explanation of an applied filter, so label formatting is
//! part of the public contract.

use serde_json::Value;

///
/// ChipSource
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChipSource {
    Quick,
    Manual,
}

///
/// FilterChip
///
/// One removable chip: an active preset, or a single field+operator pair
/// of the manual filter.
///

#[derive(Clone, Debug, PartialEq)]
pub struct FilterChip {
    pub id: String,
    pub label: String,
    pub field: Option<String>,
    pub operator: Option<String>,
    pub value: Option<Value>,
    pub source: ChipSource,
    pub preset_id: Option<String>,
}

/// Human-readable label for a filter operator in the host's query dialect.
/// Unknown operators pass through unchanged.
#[must_use]
pub fn operator_label(operator: &str) -> &str {
    match operator {
        "_eq" => "equals",
        "_neq" => "not equals",
        "_contains" => "contains",
        "_ncontains" => "does not contain",
        "_starts_with" => "starts with",
        "_ends_with" => "ends with",
        "_gt" => "greater than",
        "_gte" => "greater than or equal",
        "_lt" => "less than",
        "_lte" => "less than or equal",
        "_in" => "is one of",
        "_nin" => "is not one of",
        "_between" => "is between",
        "_nbetween" => "is not between",
        "_empty" => "is empty",
        "_nempty" => "is not empty",
        "_null" => "is null",
        "_nnull" => "is not null",
        other => other,
    }
}

/// Operators whose label carries no value.
const VALUELESS_OPERATORS: &[&str] = &["_empty", "_nempty", "_null", "_nnull"];

/// Chip label for one manual filter condition.
#[must_use]
pub fn format_filter_label(field: &str, operator: &str, value: &Value) -> String {
    let field = title_case_field(field);
    let op = operator_label(operator);

    if VALUELESS_OPERATORS.contains(&operator) {
        return format!("{field} {op}");
    }

    format!("{field} {op} {}", format_value(value))
}

/// Special-value formatting: the `$NOW` sentinel, the current-user
/// sentinel, and booleans as yes/no.
pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s == "$CURRENT_USER" => "current user".to_string(),
        Value::String(s) if s.starts_with("$NOW") => s.replacen("$NOW", "now", 1),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        other => other.to_string(),
    }
}

/// `publish_date` -> `Publish Date`.
pub(crate) fn title_case_field(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
