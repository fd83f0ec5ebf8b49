//! Alias / field-path resolution: from requested logical field keys to the
//! concrete API field list to fetch, and back from fetched items to cell
//! values.

mod display;

use crate::{SYSTEM_FILE_COLLECTION, field::FieldKey, stores::FieldStore};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub(crate) use display::adjust_field_for_display;

///
/// AliasEntry
///
/// Mapping of one requested field key to the API fields that fetch it.
///
/// When two or more different nested paths share a root, the root is
/// ambiguous. Current policy detects the collision but fetches the
/// unaliased root and relies on path extraction instead of generating a
/// hashed alias, so `aliased` stays false and `alias_token` stays unset.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AliasEntry {
    /// The key exactly as requested, suffixes included.
    pub key: String,

    /// First path segment, the aliasing/collision unit.
    pub root: String,

    /// API fields to request for this key.
    pub api_fields: Vec<String>,

    /// Whether a synthetic alias was generated for this key.
    pub aliased: bool,

    /// The synthetic alias, when one was generated.
    pub alias_token: Option<String>,

    /// Whether this key's root collides with other nested paths.
    pub ambiguous_root: bool,
}

/// Resolve requested field keys into the API field list to fetch.
///
/// Resolution is per-key and total: a failed display or metadata lookup
/// falls back to the unresolved key and never aborts the whole set.
/// Output is deterministic for identical inputs and an unchanged store.
#[must_use]
pub fn resolve_fields(
    requested: &[String],
    collection: &str,
    fields: Option<&dyn FieldStore>,
) -> Vec<AliasEntry> {
    // Group by root to find colliding relation paths.
    let mut by_root: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for key in requested {
        by_root.entry(root_of(key)).or_default().push(key.as_str());
    }

    let ambiguous_roots: Vec<&str> = by_root
        .iter()
        .filter(|(_, keys)| {
            let mut unique: Vec<&str> = Vec::new();
            for key in *keys {
                if !unique.contains(key) {
                    unique.push(key);
                }
            }
            unique.len() > 1 && unique.iter().any(|k| k.contains('.'))
        })
        .map(|(root, _)| *root)
        .collect();

    requested
        .iter()
        .map(|key| {
            let parsed = FieldKey::new(key.as_str());
            let root = parsed.root().to_string();

            let mut api_fields = adjust_field_for_display(&parsed, collection, fields);

            // Nested keys also fetch the unaliased root so values stay
            // extractable when paths collide.
            if parsed.is_nested() && !api_fields.iter().any(|f| *f == root) {
                api_fields.push(root.clone());
            }

            // Translation-group roots need the literal pseudo-field next
            // to the flattened path so the API returns translation rows.
            let is_translation_group = fields
                .and_then(|store| store.field(collection, &root))
                .is_some_and(|f| f.is_translation_group());
            if is_translation_group {
                if !api_fields.iter().any(|f| f == "translations") {
                    api_fields.push("translations".to_string());
                }
                let full = parsed.full_path().to_string();
                if !api_fields.contains(&full) {
                    api_fields.push(full);
                }
            }

            if collection == SYSTEM_FILE_COLLECTION {
                api_fields = strip_thumbnail_segments(api_fields);
            }

            AliasEntry {
                ambiguous_root: ambiguous_roots.contains(&root.as_str()),
                key: key.clone(),
                root,
                api_fields,
                aliased: false,
                alias_token: None,
            }
        })
        .collect()
}

/// The alias→root map for the fetch call. Empty under current policy;
/// kept so the fetch path does not change when true aliasing lands.
#[must_use]
pub fn alias_query(entries: &[AliasEntry]) -> Map<String, Value> {
    entries
        .iter()
        .filter(|entry| entry.aliased)
        .filter_map(|entry| {
            entry
                .alias_token
                .as_ref()
                .map(|token| (token.clone(), Value::String(entry.root.clone())))
        })
        .collect()
}

/// Locate the value for an originally requested key inside a fetched item.
///
/// `$`-prefixed path segments are display affordances without an API
/// counterpart and are skipped. Returns `None` when the path does not
/// resolve; never panics.
#[must_use]
pub fn value_for_key<'a>(item: &'a Value, key: &str, entries: &[AliasEntry]) -> Option<&'a Value> {
    let path = FieldKey::new(key).full_path().to_string();
    let cleaned = if path.contains('.') {
        path.split('.')
            .filter(|segment| !segment.starts_with('$'))
            .collect::<Vec<_>>()
            .join(".")
    } else {
        path
    };

    let entry = entries.iter().find(|entry| entry.key == key);

    match entry {
        Some(entry) if entry.aliased => {
            let token = entry.alias_token.as_deref()?;
            if cleaned.contains('.') {
                let rest = cleaned.split_once('.').map(|(_, rest)| rest)?;
                get_path(item, &format!("{token}.{rest}"))
            } else {
                get_path(item, token)
            }
        }
        _ => get_path(item, &cleaned),
    }
}

/// Walk a dotted path through objects (by key) and arrays (by index).
fn get_path<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = item;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(list) => list.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Drop synthetic `$thumbnail` segments; the API has no such field.
fn strip_thumbnail_segments(paths: Vec<String>) -> Vec<String> {
    paths
        .into_iter()
        .filter_map(|path| {
            let kept: Vec<&str> = path
                .split('.')
                .filter(|segment| *segment != "$thumbnail")
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(kept.join("."))
            }
        })
        .collect()
}

/// First path segment of a raw key, language suffix excluded.
fn root_of(key: &str) -> &str {
    let path = key.split(':').next().unwrap_or(key);
    path.split('.').next().unwrap_or(path)
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
