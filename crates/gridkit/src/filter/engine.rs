use crate::{
    filter::{
        ChipSource, Filter, FilterChip, FilterLogic, PresetDraft, QuickFilterPreset, chips,
        merge_filters,
    },
    layout::LayoutOptions,
};
use log::debug;
use serde_json::Value;
use ulid::Ulid;

///
/// FilterEngine
///
/// Quick-filter state for one collection: the persisted preset list, the
/// active selection (at most one preset today; the merge path already
/// handles N), the ad-hoc manual predicate, and the combination logic.
///
/// The engine mutates its own snapshot; the host persists it by syncing
/// the layout options back through its emit contract.
///

#[derive(Clone, Debug, Default)]
pub struct FilterEngine {
    collection: String,
    presets: Vec<QuickFilterPreset>,
    active_preset_ids: Vec<String>,
    quick_filter: Filter,
    manual_filter: Filter,
    logic: FilterLogic,
}

impl FilterEngine {
    #[must_use]
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Self::default()
        }
    }

    /// Load preset state from persisted layout options.
    #[must_use]
    pub fn from_layout(collection: impl Into<String>, layout: &LayoutOptions) -> Self {
        let collection = collection.into();
        let presets = layout
            .quick_filters
            .iter()
            .cloned()
            .map(|mut preset| {
                if preset.collection.is_empty() {
                    preset.collection.clone_from(&collection);
                }
                preset
            })
            .collect();

        let mut engine = Self {
            collection,
            presets,
            active_preset_ids: layout.active_quick_filter_id.iter().cloned().collect(),
            ..Self::default()
        };
        engine.rebuild_quick_filters();
        engine
    }

    /// Write preset state back onto the layout options for persistence.
    pub fn sync_layout(&self, layout: &mut LayoutOptions) {
        layout.quick_filters.clone_from(&self.presets);
        layout.active_quick_filter_id = self.active_preset_ids.first().cloned();
    }

    #[must_use]
    pub fn presets(&self) -> &[QuickFilterPreset] {
        &self.presets
    }

    #[must_use]
    pub fn active_preset_ids(&self) -> &[String] {
        &self.active_preset_ids
    }

    #[must_use]
    pub const fn filter_logic(&self) -> FilterLogic {
        self.logic
    }

    pub fn set_filter_logic(&mut self, logic: FilterLogic) {
        self.logic = logic;
    }

    #[must_use]
    pub const fn quick_filter(&self) -> &Filter {
        &self.quick_filter
    }

    #[must_use]
    pub const fn manual_filter(&self) -> &Filter {
        &self.manual_filter
    }

    /// The combined predicate for every fetch.
    #[must_use]
    pub fn merged_filter(&self) -> Option<Value> {
        merge_filters(&self.quick_filter, &self.manual_filter, self.logic)
    }

    /// Activate a preset, or deactivate it when it is already active.
    /// Single-select semantics: activating one deactivates any other.
    pub fn toggle_preset(&mut self, id: &str) {
        if self.active_preset_ids.iter().any(|active| active == id) {
            self.active_preset_ids.clear();
        } else {
            self.active_preset_ids = vec![id.to_string()];
        }
        self.rebuild_quick_filters();
    }

    /// Recompute the effective quick-filter predicate from the active
    /// selection. Multiple active presets combine under `_and`; the UI
    /// only allows one today but the merge path is kept N-way.
    pub fn rebuild_quick_filters(&mut self) {
        let active: Vec<&QuickFilterPreset> = self
            .presets
            .iter()
            .filter(|preset| self.active_preset_ids.contains(&preset.id))
            .collect();

        self.quick_filter = match active.as_slice() {
            [] => Filter::new(),
            [single] => single.filter.clone(),
            many => {
                let parts: Vec<Value> = many
                    .iter()
                    .map(|preset| Value::Object(preset.filter.clone()))
                    .collect();
                let mut combined = Filter::new();
                combined.insert("_and".to_string(), Value::Array(parts));
                combined
            }
        };
    }

    /// Persist a new preset. A pinned preset activates immediately.
    /// Returns the generated preset id.
    pub fn save_preset(&mut self, draft: PresetDraft) -> String {
        let id = format!("filter-{}", Ulid::new().to_string().to_lowercase());
        debug!("saving quick-filter preset '{}' as {id}", draft.name);

        let preset = QuickFilterPreset {
            id: id.clone(),
            name: draft.name,
            filter: draft.filter,
            description: draft.description,
            icon: draft.icon,
            color: draft.color,
            pinned: draft.pinned,
            order: Some(self.presets.len()),
            collection: self.collection.clone(),
        };
        let pinned = preset.pinned;
        self.presets.push(preset);

        if pinned {
            self.active_preset_ids = vec![id.clone()];
            self.rebuild_quick_filters();
        }

        id
    }

    /// Remove a preset. Deleting the active preset clears the selection
    /// and resets the quick-filter predicate.
    pub fn delete_preset(&mut self, id: &str) {
        self.presets.retain(|preset| preset.id != id);

        if self.active_preset_ids.iter().any(|active| active == id) {
            debug!("deleted active quick-filter preset {id}");
            self.active_preset_ids.clear();
            self.quick_filter = Filter::new();
        }
    }

    /// Swap a preset with its neighbor and rewrite the explicit `order`
    /// on both so the order stays stable under future re-sorts.
    pub fn move_preset(&mut self, id: &str, direction: isize) {
        let Some(index) = self.presets.iter().position(|preset| preset.id == id) else {
            return;
        };

        let Some(new_index) = index.checked_add_signed(direction) else {
            return;
        };
        if new_index >= self.presets.len() {
            return;
        }

        self.presets.swap(index, new_index);
        self.presets[index].order = Some(index);
        self.presets[new_index].order = Some(new_index);
    }

    /// Apply an in-place update to a preset; unknown ids are ignored.
    pub fn update_preset(&mut self, id: &str, update: impl FnOnce(&mut QuickFilterPreset)) {
        if let Some(preset) = self.presets.iter_mut().find(|preset| preset.id == id) {
            update(preset);
            self.rebuild_quick_filters();
        }
    }

    /// Replace the ad-hoc manual predicate.
    pub fn set_manual_filters(&mut self, filter: Option<Filter>) {
        self.manual_filter = filter.unwrap_or_default();
    }

    /// Deactivate the preset behind a quick chip.
    pub fn remove_quick_filter(&mut self, chip_id: &str) {
        self.active_preset_ids.retain(|active| active != chip_id);
        self.rebuild_quick_filters();
    }

    /// Remove one field+operator condition behind a manual chip.
    pub fn remove_manual_filter(&mut self, chip_id: &str) {
        let Some((field, operator)) = chip_id.split_once('-') else {
            return;
        };

        let emptied = match self.manual_filter.get_mut(field) {
            Some(Value::Object(conditions)) => {
                conditions.remove(operator);
                conditions.is_empty()
            }
            _ => false,
        };

        if emptied {
            self.manual_filter.remove(field);
        }
    }

    pub fn clear_all_filters(&mut self) {
        self.active_preset_ids.clear();
        self.quick_filter = Filter::new();
        self.manual_filter = Filter::new();
    }

    /// One chip per active preset.
    #[must_use]
    pub fn quick_filter_chips(&self) -> Vec<FilterChip> {
        self.active_preset_ids
            .iter()
            .filter_map(|id| {
                let preset = self.presets.iter().find(|preset| &preset.id == id)?;
                Some(FilterChip {
                    id: preset.id.clone(),
                    label: preset.name.clone(),
                    field: None,
                    operator: None,
                    value: None,
                    source: ChipSource::Quick,
                    preset_id: Some(preset.id.clone()),
                })
            })
            .collect()
    }

    /// One chip per field+operator pair of the manual predicate.
    #[must_use]
    pub fn manual_filter_chips(&self) -> Vec<FilterChip> {
        let mut out = Vec::new();

        for (field, conditions) in &self.manual_filter {
            let Value::Object(conditions) = conditions else {
                continue;
            };
            for (operator, value) in conditions {
                out.push(FilterChip {
                    id: format!("{field}-{operator}"),
                    label: chips::format_filter_label(field, operator, value),
                    field: Some(field.clone()),
                    operator: Some(operator.clone()),
                    value: Some(value.clone()),
                    source: ChipSource::Manual,
                    preset_id: None,
                });
            }
        }

        out
    }
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
