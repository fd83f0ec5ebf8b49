use serde::{Deserialize, Serialize};

/// Host marker for translation-group fields, carried in `special`.
pub(crate) const TRANSLATIONS_SPECIAL: &str = "translations";

///
/// FieldDescriptor
///
/// Immutable snapshot of one schema field as known to the host's metadata
/// store. The core never mutates it; unknown shapes are rejected at the
/// store boundary rather than trusted.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Field key as used in layouts and predicates.
    pub key: String,

    /// Declared storage type (`string`, `uuid`, `json`, ...).
    #[serde(rename = "type")]
    pub field_type: String,

    /// Configured editing interface, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,

    /// Configured display renderer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Template string for template-driven displays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_template: Option<String>,

    /// Host-side display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub readonly: bool,

    #[serde(default)]
    pub generated: bool,

    #[serde(default)]
    pub primary_key: bool,

    #[serde(default)]
    pub auto_increment: bool,

    /// Host special markers (`translations`, `cast-json`, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special: Vec<String>,
}

impl FieldDescriptor {
    /// Minimal descriptor for tests and ad-hoc construction.
    #[must_use]
    pub fn new(key: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    /// True when the host marks this field as a translation group.
    #[must_use]
    pub fn is_translation_group(&self) -> bool {
        self.special.iter().any(|s| s == TRANSLATIONS_SPECIAL)
    }
}
