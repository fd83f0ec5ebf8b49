use crate::filter::Filter;
use serde::{Deserialize, Serialize};

///
/// FilterLogic
///
/// How quick and manual predicates combine when both are present.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLogic {
    #[default]
    And,
    Or,
}

impl FilterLogic {
    /// Wrapper operator in the host's query dialect.
    #[must_use]
    pub const fn wrapper(self) -> &'static str {
        match self {
            Self::And => "_and",
            Self::Or => "_or",
        }
    }
}

///
/// QuickFilterPreset
///
/// A named, reusable filter predicate persisted inside the layout
/// configuration. Field names follow the host's persisted JSON shape.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickFilterPreset {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub filter: Filter,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, rename = "isPinned")]
    pub pinned: bool,

    /// Explicit position, rewritten on reorder to stay stable under
    /// future re-sorts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,

    /// Collection the preset was created for.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub collection: String,
}

///
/// PresetDraft
///
/// Input for creating a preset; the engine assigns the id.
///

#[derive(Clone, Debug, Default)]
pub struct PresetDraft {
    pub name: String,
    pub filter: Filter,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub pinned: bool,
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::QuickFilterPreset;
    use serde_json::json;

    #[test]
    fn preset_round_trips_through_the_persisted_shape() {
        let raw = json!({
            "id": "filter-01",
            "name": "Published",
            "filter": { "status": { "_eq": "published" } },
            "isPinned": true,
            "order": 2,
        });

        let preset: QuickFilterPreset = serde_json::from_value(raw.clone()).unwrap();
        assert!(preset.pinned);
        assert_eq!(preset.order, Some(2));
        assert_eq!(serde_json::to_value(&preset).unwrap(), raw);
    }
}
