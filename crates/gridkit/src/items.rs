//! Item-level operations: duplication with and without translation rows.
//!
//! Duplication never copies audit columns or the primary key; the backend
//! assigns fresh ones. Translation rows are cloned after the base item
//! exists and re-parented onto the new id.

use crate::{
    api::{DataApi, ExportFormat, FetchQuery},
    error::Error,
};
use log::warn;
use serde_json::{Map, Value};

/// Audit columns the backend owns. Stripped from every duplicate payload.
pub const AUDIT_FIELDS: &[&str] = &[
    "date_created",
    "date_updated",
    "user_created",
    "user_updated",
];

/// Duplicate one item, letting the backend assign a fresh primary key and
/// audit trail. Returns the created item.
pub fn duplicate_item(
    api: &dyn DataApi,
    collection: &str,
    id: &str,
    pk_field: &str,
) -> Result<Value, Error> {
    let source = api.fetch_one(collection, id, &["*".to_string()])?;
    let payload = duplicate_payload(&source, pk_field, id)?;

    api.create(collection, Value::Object(payload))
}

/// Duplicate one item together with its translation rows.
///
/// The base item is created first; each translation row is then cloned,
/// re-parented onto the new id, and posted to the `<collection>_translations`
/// junction. A row that fails to post is logged and skipped so a partial
/// failure never loses the base duplicate.
pub fn duplicate_item_with_translations(
    api: &dyn DataApi,
    collection: &str,
    id: &str,
    pk_field: &str,
) -> Result<Value, Error> {
    let source = api.fetch_one(
        collection,
        id,
        &["*".to_string(), "translations.*".to_string()],
    )?;
    let payload = duplicate_payload(&source, pk_field, id)?;

    let created = api.create(collection, Value::Object(payload))?;
    let Some(new_id) = created.get(pk_field).filter(|v| !v.is_null()).cloned() else {
        return Ok(created);
    };

    let junction = format!("{collection}_translations");
    let parent_key = translation_parent_key(collection);

    for row in source
        .get("translations")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        let Value::Object(row) = row else { continue };

        let mut clone = row.clone();
        clone.remove("id");
        clone.insert(parent_key.clone(), new_id.clone());

        if let Err(err) = api.create(&junction, Value::Object(clone)) {
            warn!("skipping translation row while duplicating {collection}/{id}: {err}");
        }
    }

    Ok(created)
}

/// Source item minus the primary key, audit columns, and translation rows.
fn duplicate_payload(source: &Value, pk_field: &str, id: &str) -> Result<Map<String, Value>, Error> {
    let Value::Object(source) = source else {
        return Err(Error::not_found(id));
    };

    let mut payload = source.clone();
    payload.remove(pk_field);
    payload.remove("translations");
    for field in AUDIT_FIELDS {
        payload.remove(*field);
    }

    Ok(payload)
}

/// Export the current view. The query carries the resolved field list and
/// the merged predicate so the export matches what the grid shows.
pub fn export_items(
    api: &dyn DataApi,
    collection: &str,
    format: ExportFormat,
    query: &FetchQuery,
) -> Result<Vec<u8>, Error> {
    api.export(collection, format, query)
}

/// Delete the selected items by primary key.
pub fn delete_items(api: &dyn DataApi, collection: &str, ids: &[String]) -> Result<(), Error> {
    api.delete(collection, ids)
}

/// Foreign-key column a translation row points back through. Content
/// collections drop their namespace prefix on the junction table.
fn translation_parent_key(collection: &str) -> String {
    let base = collection.strip_prefix("content_").unwrap_or(collection);
    format!("{base}_id")
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{
        delete_items, duplicate_item, duplicate_item_with_translations, export_items,
        translation_parent_key,
    };
    use crate::{
        api::{ExportFormat, FetchQuery},
        test_support::MockApi,
    };
    use serde_json::json;

    #[test]
    fn duplicate_strips_the_primary_key_and_audit_columns() {
        let api = MockApi::default().with_item(
            "articles",
            "7",
            json!({
                "id": 7,
                "title": "Hello",
                "date_created": "2025-01-01T00:00:00Z",
                "user_created": "u-1",
                "status": "draft",
            }),
        );

        duplicate_item(&api, "articles", "7", "id").unwrap();

        let creates = api.creates();
        assert_eq!(creates.len(), 1);
        let (collection, payload) = &creates[0];
        assert_eq!(collection, "articles");
        assert_eq!(payload["title"], json!("Hello"));
        assert_eq!(payload["status"], json!("draft"));
        assert!(payload.get("date_created").is_none());
        assert!(payload.get("user_created").is_none());
    }

    #[test]
    fn duplicating_a_missing_item_is_not_found() {
        let api = MockApi::default();
        let err = duplicate_item(&api, "articles", "99", "id").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn translation_rows_are_cloned_and_reparented() {
        let api = MockApi::default().with_item(
            "articles",
            "7",
            json!({
                "id": 7,
                "title": "Hello",
                "translations": [
                    { "id": 31, "articles_id": 7, "languages_code": "de-DE", "title": "Hallo" },
                    { "id": 32, "articles_id": 7, "languages_code": "fr-FR", "title": "Salut" },
                ],
            }),
        );

        let created = duplicate_item_with_translations(&api, "articles", "7", "id").unwrap();
        let new_id = created["id"].clone();

        let creates = api.creates();
        assert_eq!(creates.len(), 3);
        assert!(creates[0].1.get("translations").is_none());

        for (collection, row) in &creates[1..] {
            assert_eq!(collection, "articles_translations");
            assert!(row.get("id").is_none());
            assert_eq!(row["articles_id"], new_id);
        }
        assert_eq!(creates[1].1["languages_code"], json!("de-DE"));
        assert_eq!(creates[2].1["languages_code"], json!("fr-FR"));
    }

    #[test]
    fn content_collections_drop_their_prefix_on_the_junction_key() {
        assert_eq!(translation_parent_key("content_articles"), "articles_id");
        assert_eq!(translation_parent_key("articles"), "articles_id");
    }

    #[test]
    fn failed_translation_rows_are_skipped_not_fatal() {
        let api = MockApi::default()
            .with_item(
                "articles",
                "7",
                json!({
                    "id": 7,
                    "title": "Hello",
                    "translations": [
                        { "id": 31, "languages_code": "de-DE", "title": "Hallo" },
                    ],
                }),
            )
            .fail_creates_for("articles_translations");

        let created = duplicate_item_with_translations(&api, "articles", "7", "id").unwrap();
        assert_eq!(created["title"], json!("Hello"));
        assert_eq!(api.creates().len(), 1);
    }

    #[test]
    fn export_and_delete_pass_through_the_transport() {
        let api = MockApi::default();

        let bytes = export_items(&api, "articles", ExportFormat::Csv, &FetchQuery::default());
        assert_eq!(bytes.unwrap(), b"csv");

        delete_items(&api, "articles", &["7".to_string(), "8".to_string()]).unwrap();
        assert_eq!(
            api.deletes(),
            vec![("articles".to_string(), vec!["7".to_string(), "8".to_string()])]
        );
    }
}
