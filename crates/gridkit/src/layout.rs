//! Persisted layout configuration.
//!
//! The host owns storage; the core reads this as plain structured data,
//! computes a new value, and hands it back through the host's emit
//! contract. Field names follow the host's persisted JSON shape.

use crate::filter::QuickFilterPreset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Spacing
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Cozy,
    Comfortable,
}

///
/// Align
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

///
/// LayoutOptions
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_toolbar: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_select: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub widths: BTreeMap<String, f64>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub align: BTreeMap<String, Align>,

    /// Custom column labels, keyed by field key (language suffix
    /// included for translation variants).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_field_names: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_mode: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_filters: Vec<QuickFilterPreset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_quick_filter_id: Option<String>,
}

impl LayoutOptions {
    /// Store a custom column label; the original name clears it.
    pub fn set_custom_field_name(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        original: &str,
    ) {
        let key = key.into();
        let name = name.into();
        if name == original || name.is_empty() {
            self.custom_field_names.remove(&key);
        } else {
            self.custom_field_names.insert(key, name);
        }
    }

    /// Drop any custom label for a removed column.
    pub fn clear_custom_field_name(&mut self, key: &str) {
        self.custom_field_names.remove(key);
    }
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
