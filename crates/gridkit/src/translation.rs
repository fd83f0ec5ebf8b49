//! Translation-language detection over the current field-key list.
//!
//! All derivations here are pure recomputations from an explicit snapshot
//! of the selected keys and the available languages; nothing is cached.

use crate::{
    field::{FieldDescriptor, FieldKey, language_variant_key},
    lang::Language,
    stores::{FieldStore, RelationStore},
};
use std::collections::BTreeMap;

/// Reserved prefix of the translation pseudo-field.
pub const TRANSLATIONS_PREFIX: &str = "translations.";

/// True iff the key addresses a translation sub-field. Prefix match on the
/// literal segment, not case-insensitive.
#[must_use]
pub fn is_translation_field(key: &str) -> bool {
    key.starts_with(TRANSLATIONS_PREFIX)
}

/// Key with any trailing `:languageCode` suffix removed (split on the
/// first `:`).
#[must_use]
pub fn base_field_key(key: &str) -> &str {
    key.split(':').next().unwrap_or(key)
}

/// Language codes already present for a base field in the current key
/// list. Empty codes from trailing colons are dropped; anything else after
/// the first colon is passed through as a literal code, malformed or not.
#[must_use]
pub fn existing_language_codes(current_keys: &[String], base_key: &str) -> Vec<String> {
    current_keys
        .iter()
        .filter_map(|key| {
            let suffix = key.strip_prefix(base_key)?.strip_prefix(':')?;
            let code = suffix.split(':').next().unwrap_or(suffix);
            (!code.is_empty()).then(|| code.to_string())
        })
        .collect()
}

/// Languages from the catalog already added for this base field.
#[must_use]
pub fn existing_languages_for_field(
    current_keys: &[String],
    languages: &[Language],
    base_key: &str,
) -> Vec<Language> {
    let existing = existing_language_codes(current_keys, base_key);
    languages
        .iter()
        .filter(|lang| existing.contains(&lang.code))
        .cloned()
        .collect()
}

/// Languages from the catalog not yet added for this base field.
#[must_use]
pub fn available_languages_for_field(
    current_keys: &[String],
    languages: &[Language],
    base_key: &str,
) -> Vec<Language> {
    let existing = existing_language_codes(current_keys, base_key);
    languages
        .iter()
        .filter(|lang| !existing.contains(&lang.code))
        .cloned()
        .collect()
}

/// True while at least one catalog language is still addable.
#[must_use]
pub fn can_add_more_languages(
    current_keys: &[String],
    languages: &[Language],
    base_key: &str,
) -> bool {
    !available_languages_for_field(current_keys, languages, base_key).is_empty()
}

///
/// TranslationFieldStatus
///
/// Per-base-field language summary, recomputed whenever the key list
/// changes.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TranslationFieldStatus {
    pub base_field: String,
    pub existing: Vec<Language>,
    pub available: Vec<Language>,
    pub can_add_more: bool,
}

/// One status entry per distinct translation base field currently present,
/// in first-seen order.
#[must_use]
pub fn translation_fields_status(
    current_keys: &[String],
    languages: &[Language],
) -> Vec<TranslationFieldStatus> {
    let mut bases: Vec<&str> = Vec::new();
    for key in current_keys {
        if !is_translation_field(key) {
            continue;
        }
        let base = base_field_key(key);
        if !bases.contains(&base) {
            bases.push(base);
        }
    }

    bases
        .into_iter()
        .map(|base| TranslationFieldStatus {
            base_field: base.to_string(),
            existing: existing_languages_for_field(current_keys, languages, base),
            available: available_languages_for_field(current_keys, languages, base),
            can_add_more: can_add_more_languages(current_keys, languages, base),
        })
        .collect()
}

/// Append one language-variant column per requested code, skipping codes
/// whose column is already present.
#[must_use]
pub fn add_language_columns(
    current_keys: &[String],
    base_key: &str,
    codes: &[String],
) -> Vec<String> {
    let mut keys = current_keys.to_vec();
    for code in codes {
        let variant = language_variant_key(base_key, code);
        if !keys.contains(&variant) {
            keys.push(variant);
        }
    }
    keys
}

/// Column header for a field key: a custom name wins, translation variants
/// render as `Name (code)`, otherwise the host label or the key itself.
#[must_use]
pub fn display_name(
    key: &str,
    custom_names: &BTreeMap<String, String>,
    fields_in_collection: &[FieldDescriptor],
) -> String {
    if let Some(custom) = custom_names.get(key) {
        return custom.clone();
    }

    let parsed = FieldKey::new(key);
    let base = parsed.full_path();
    let host_name = fields_in_collection
        .iter()
        .find(|f| f.key == base)
        .and_then(|f| f.name.clone());

    if let Some(code) = parsed.language() {
        let base_name = host_name
            .unwrap_or_else(|| base.rsplit('.').next().unwrap_or(base).to_string());
        return format!("{base_name} ({code})");
    }

    host_name.unwrap_or_else(|| key.to_string())
}

/// Descriptor for the sub-field behind `translations.<sub>`, resolved
/// through the translations relation into the related collection. Returns
/// `None` whenever any hop is missing.
#[must_use]
pub fn translation_field_descriptor(
    collection: &str,
    key: &str,
    fields: &dyn FieldStore,
    relations: &dyn RelationStore,
) -> Option<FieldDescriptor> {
    let sub_field = base_field_key(key).strip_prefix(TRANSLATIONS_PREFIX)?;

    let relation = relations
        .relations_for_field(collection, "translations")
        .into_iter()
        .next()?;
    let translations_collection = relation
        .related_collection
        .unwrap_or(relation.collection);

    fields.field(&translations_collection, sub_field)
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
