//! Pending inline edits and their translation-aware flush payloads.
//!
//! Edits accumulate per item until flushed; two rapid edits to the same
//! item coalesce into one flush of the latest accumulated field set
//! (last-write-wins per field). A failed flush keeps the item's edits
//! pending for retry and never touches other items.

use crate::{
    api::DataApi,
    error::Error,
    field::{FieldDescriptor, FieldKey},
    support::{SupportVerdict, evaluate},
};
use log::debug;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

/// Key of the language column on a translation row.
const LANGUAGES_CODE: &str = "languages_code";

///
/// EditValue
///
/// One pending cell edit: a plain value, one language's translation
/// sub-field, or a full replacement of the translation rows.
///

#[derive(Clone, Debug, PartialEq)]
pub enum EditValue {
    Plain(Value),
    Translation {
        language: String,
        translation_field: String,
        value: Value,
    },
    FullTranslations(Vec<Value>),
}

///
/// PendingEdits
///
/// In-memory edit buffer keyed by item id, then by field key. Confined to
/// the single UI thread; edits to distinct items never interfere.
///

#[derive(Clone, Debug, Default)]
pub struct PendingEdits {
    edits: BTreeMap<String, BTreeMap<String, EditValue>>,
}

impl PendingEdits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit. Later edits to the same field win.
    pub fn set(&mut self, item_id: impl Into<String>, field: impl Into<String>, value: EditValue) {
        self.edits
            .entry(item_id.into())
            .or_default()
            .insert(field.into(), value);
    }

    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    #[must_use]
    pub fn items_with_edits(&self) -> Vec<&str> {
        self.edits.keys().map(String::as_str).collect()
    }

    pub fn clear_item(&mut self, item_id: &str) {
        self.edits.remove(item_id);
    }

    pub fn clear_all(&mut self) {
        self.edits.clear();
    }

    /// Fold an item's pending edits into one patch payload.
    ///
    /// Plain edits patch the suffix-stripped field directly. Translation
    /// edits merge into the item's existing translation rows
    /// (update-or-append by language); a full-translations edit replaces
    /// the rows wholesale.
    #[must_use]
    pub fn build_patch(&self, item_id: &str, item: &Value) -> Option<Value> {
        let fields = self.edits.get(item_id)?;

        let mut patch = Map::new();
        let mut translations: Option<Vec<Value>> = None;

        for (field, edit) in fields {
            match edit {
                EditValue::Plain(value) => {
                    let clean = FieldKey::new(field.as_str()).full_path().to_string();
                    patch.insert(clean, value.clone());
                }
                EditValue::FullTranslations(rows) => {
                    translations = Some(rows.clone());
                }
                EditValue::Translation {
                    language,
                    translation_field,
                    value,
                } => {
                    let rows = translations.get_or_insert_with(|| existing_translations(item));
                    merge_translation_row(rows, language, translation_field, value.clone());
                }
            }
        }

        if let Some(rows) = translations {
            patch.insert("translations".to_string(), Value::Array(rows));
        }

        (!patch.is_empty()).then(|| Value::Object(patch))
    }

    /// Flush one item's pending edits through the data API.
    ///
    /// On success the item's entry is cleared and the updated item
    /// returned; on failure the edits stay pending and the error
    /// propagates unchanged.
    pub fn flush(
        &mut self,
        api: &dyn DataApi,
        collection: &str,
        item_id: &str,
        item: &Value,
    ) -> Result<Option<Value>, Error> {
        let Some(patch) = self.build_patch(item_id, item) else {
            return Ok(None);
        };

        debug!("flushing pending edits for {collection}/{item_id}");
        let updated = api.update(collection, item_id, patch)?;
        self.clear_item(item_id);

        Ok(Some(updated))
    }
}

/// Reject writes to fields whose verdict is not `Full`. Calling UIs must
/// gate every inline write through this check.
pub fn ensure_editable(field: Option<&FieldDescriptor>, key: &str) -> Result<(), Error> {
    let verdict = evaluate(field, Some(key));
    if verdict == SupportVerdict::Full {
        Ok(())
    } else {
        Err(Error::UnsupportedField {
            key: key.to_string(),
            verdict,
        })
    }
}

fn existing_translations(item: &Value) -> Vec<Value> {
    item.get("translations")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Update the row for `language` in place, or append a new row.
fn merge_translation_row(rows: &mut Vec<Value>, language: &str, field: &str, value: Value) {
    let existing = rows.iter_mut().find(|row| {
        row.get(LANGUAGES_CODE)
            .and_then(Value::as_str)
            .is_some_and(|code| code == language)
    });

    match existing {
        Some(Value::Object(row)) => {
            row.insert(field.to_string(), value);
        }
        Some(_) => {}
        None => rows.push(json!({ LANGUAGES_CODE: language, field: value })),
    }
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{EditValue, PendingEdits, ensure_editable};
    use crate::{
        error::Error, field::FieldDescriptor, support::SupportVerdict, test_support::MockApi,
    };
    use serde_json::json;

    #[test]
    fn plain_edits_strip_the_language_suffix() {
        let mut edits = PendingEdits::new();
        edits.set("7", "title:de-DE", EditValue::Plain(json!("Hallo")));

        let patch = edits.build_patch("7", &json!({})).unwrap();
        assert_eq!(patch, json!({ "title": "Hallo" }));
    }

    #[test]
    fn later_edits_to_the_same_field_win() {
        let mut edits = PendingEdits::new();
        edits.set("7", "title", EditValue::Plain(json!("first")));
        edits.set("7", "title", EditValue::Plain(json!("second")));

        let patch = edits.build_patch("7", &json!({})).unwrap();
        assert_eq!(patch, json!({ "title": "second" }));
    }

    #[test]
    fn translation_edit_updates_the_existing_language_row() {
        let item = json!({
            "translations": [
                { "id": 1, "languages_code": "de-DE", "description": "Alt" },
                { "id": 2, "languages_code": "en-US", "description": "Old" },
            ],
        });

        let mut edits = PendingEdits::new();
        edits.set(
            "7",
            "translations.description:de-DE",
            EditValue::Translation {
                language: "de-DE".to_string(),
                translation_field: "description".to_string(),
                value: json!("Neu"),
            },
        );

        let patch = edits.build_patch("7", &item).unwrap();
        assert_eq!(
            patch["translations"],
            json!([
                { "id": 1, "languages_code": "de-DE", "description": "Neu" },
                { "id": 2, "languages_code": "en-US", "description": "Old" },
            ])
        );
    }

    #[test]
    fn translation_edit_appends_a_row_for_a_new_language() {
        let item = json!({ "translations": [] });

        let mut edits = PendingEdits::new();
        edits.set(
            "7",
            "translations.description:fr-FR",
            EditValue::Translation {
                language: "fr-FR".to_string(),
                translation_field: "description".to_string(),
                value: json!("Nouveau"),
            },
        );

        let patch = edits.build_patch("7", &item).unwrap();
        assert_eq!(
            patch["translations"],
            json!([{ "languages_code": "fr-FR", "description": "Nouveau" }])
        );
    }

    #[test]
    fn full_translations_replace_the_rows_wholesale() {
        let mut edits = PendingEdits::new();
        edits.set(
            "7",
            "translations",
            EditValue::FullTranslations(vec![json!({
                "languages_code": "it-IT", "title": "Ciao",
            })]),
        );

        let patch = edits
            .build_patch("7", &json!({ "translations": [{ "languages_code": "de-DE" }] }))
            .unwrap();
        assert_eq!(
            patch["translations"],
            json!([{ "languages_code": "it-IT", "title": "Ciao" }])
        );
    }

    #[test]
    fn flush_clears_only_the_flushed_item() {
        let api = MockApi::default();
        let mut edits = PendingEdits::new();
        edits.set("7", "title", EditValue::Plain(json!("A")));
        edits.set("8", "title", EditValue::Plain(json!("B")));

        let updated = edits.flush(&api, "articles", "7", &json!({})).unwrap();
        assert!(updated.is_some());
        assert_eq!(edits.items_with_edits(), vec!["8"]);
    }

    #[test]
    fn failed_flush_keeps_the_edits_pending() {
        let api = MockApi::failing(Error::validation("status must be a known value"));
        let mut edits = PendingEdits::new();
        edits.set("7", "status", EditValue::Plain(json!("nope")));

        let err = edits.flush(&api, "articles", "7", &json!({})).unwrap_err();
        assert_eq!(err, Error::validation("status must be a known value"));
        assert!(edits.has_edits());
    }

    #[test]
    fn flush_without_edits_is_a_no_op() {
        let api = MockApi::default();
        let mut edits = PendingEdits::new();
        let updated = edits.flush(&api, "articles", "7", &json!({})).unwrap();
        assert!(updated.is_none());
        assert!(api.updates().is_empty());
    }

    #[test]
    fn writes_are_gated_on_a_full_verdict() {
        let field = FieldDescriptor {
            interface: Some("input".to_string()),
            ..FieldDescriptor::new("title", "string")
        };
        assert!(ensure_editable(Some(&field), "title").is_ok());

        let err = ensure_editable(Some(&field), "api_token").unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedField {
                key: "api_token".to_string(),
                verdict: SupportVerdict::Readonly,
            }
        );
    }
}
