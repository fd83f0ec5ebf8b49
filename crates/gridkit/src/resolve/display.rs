//! Display-field adjustment: a configured display renderer may need more
//! sub-fields than the requested key itself.

use crate::{field::FieldKey, stores::FieldStore};
use log::debug;

/// Sub-fields the image cell renderer reads.
const IMAGE_DISPLAY_FIELDS: &[&str] = &["id", "type", "title", "filename", "width", "height"];

/// Sub-fields the file cell renderer reads.
const FILE_DISPLAY_FIELDS: &[&str] = &["id", "type", "title", "filename", "filesize"];

/// Sub-fields the user cell renderer reads.
const USER_DISPLAY_FIELDS: &[&str] = &["id", "avatar.id", "email", "first_name", "last_name"];

/// Default sub-fields for relational value displays.
const RELATED_DISPLAY_FIELDS: &[&str] = &["id", "status", "title", "name"];

/// Expand one requested key into the API paths its configured display
/// renderer needs. Falls back to the key's own path whenever no display is
/// configured, the store is unavailable, or resolution fails: a display
/// lookup must never abort field fetching.
pub(crate) fn adjust_field_for_display(
    key: &FieldKey,
    collection: &str,
    fields: Option<&dyn FieldStore>,
) -> Vec<String> {
    let path = key.full_path();

    let Some(fields) = fields else {
        return vec![path.to_string()];
    };

    let Some(field) = fields.field(collection, path) else {
        debug!("display adjustment: no descriptor for {collection}.{path}, keeping key");
        return vec![path.to_string()];
    };

    if let Some(template) = field.display_template.as_deref() {
        let tokens = template_fields(template);
        if !tokens.is_empty() {
            return tokens
                .into_iter()
                .map(|token| format!("{path}.{token}"))
                .collect();
        }
    }

    let subfields = match field.display.as_deref() {
        Some("image") => IMAGE_DISPLAY_FIELDS,
        Some("file") => FILE_DISPLAY_FIELDS,
        Some("user") => USER_DISPLAY_FIELDS,
        Some("related-values") => RELATED_DISPLAY_FIELDS,
        _ => return vec![path.to_string()],
    };

    subfields
        .iter()
        .map(|sub| format!("{path}.{sub}"))
        .collect()
}

/// Extract `{{ field.path }}` tokens from a display template, in order.
pub(crate) fn template_fields(template: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(end) = rest[start + 2..].find("}}") else {
            break;
        };
        let token = rest[start + 2..start + 2 + end].trim();
        if !token.is_empty() && !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
        rest = &rest[start + 2 + end + 2..];
    }

    tokens
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
