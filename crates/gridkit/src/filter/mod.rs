//! Quick-filter presets, merge logic, and displayable filter chips.

mod chips;
mod engine;
mod merge;
mod preset;

pub use chips::{ChipSource, FilterChip, format_filter_label, operator_label};
pub use engine::FilterEngine;
pub use merge::merge_filters;
pub use preset::{FilterLogic, PresetDraft, QuickFilterPreset};

/// A filter predicate in the host's JSON query dialect
/// (`{ "status": { "_eq": "published" } }`).
pub type Filter = serde_json::Map<String, serde_json::Value>;
