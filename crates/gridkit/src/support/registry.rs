//! Registry of field types and interfaces verified for inline editing.
//!
//! Pure data, no behavior. Anything absent from a table is treated as
//! unsupported (`Support::None`), never as an error: unknown is
//! conservative-deny.

///
/// Support
///
/// Classification level for a type or interface table entry.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Support {
    Full,
    Partial,
    None,
}

impl Support {
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Support level for a declared storage type. Lookup is case-insensitive.
#[must_use]
pub fn type_support(field_type: &str) -> Support {
    match field_type.to_ascii_lowercase().as_str() {
        // text and number types
        "string" | "text" | "integer" | "biginteger" | "float" | "decimal" | "boolean" => {
            Support::Full
        }

        // json depends on the interface
        "json" => Support::Partial,

        // date/time types
        "date" | "datetime" | "time" | "timestamp" => Support::Full,

        // only safe when paired with an image interface
        "uuid" => Support::Partial,

        // hash is never editable, geometry/alias/csv have no inline editor
        _ => Support::None,
    }
}

/// Support level for a configured editing interface. Lookup is exact.
#[must_use]
pub fn interface_support(interface: &str) -> Support {
    match interface {
        // text inputs
        "input" | "input-email" | "input-url" | "textarea" | "input-rich-text-html"
        | "input-rich-text-md" | "wysiwyg" => Support::Full,

        // selection interfaces
        "select-dropdown" | "select-radio" | "boolean" | "toggle" => Support::Full,

        // number inputs
        "input-number" | "slider" => Support::Full,

        // image fields have a dedicated safe cell renderer
        "file-image" | "image" => Support::Full,

        // date/time interfaces
        "datetime" | "date" | "time" | "timestamp" => Support::Full,

        // color fields have a dedicated cell renderer
        "select-color" | "color" => Support::Full,

        // complex tag operations still need the detail view
        "tags" => Support::Partial,

        // relational, presentation, grouping, code, map, password/hash and
        // general file interfaces all fall through to conservative deny
        _ => Support::None,
    }
}

/// Audit and identifier fields that must never be edited inline,
/// regardless of their declared type.
pub const READONLY_SYSTEM_FIELDS: &[&str] = &[
    "id",
    "date_created",
    "date_updated",
    "user_created",
    "user_updated",
];

/// Substrings that mark a field key as security-sensitive. Matched
/// case-insensitively by containment.
pub const SENSITIVE_NAME_PATTERNS: &[&str] =
    &["password", "secret", "token", "key", "hash", "salt"];

/// System-managed presentation fields: manual sort order and the computed
/// thumbnail pseudo-field. Registry data for hosts; the editability
/// verdict does not consult this list.
pub const NON_EDITABLE_SYSTEM_FIELDS: &[&str] = &["sort", "$thumbnail"];

/// True when the key contains any sensitive pattern, case-insensitively.
pub(crate) fn is_sensitive_key(key: &str) -> bool {
    let lowered = key.to_ascii_lowercase();
    SENSITIVE_NAME_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
