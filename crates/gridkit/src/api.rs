//! Data API boundary.
//!
//! The host owns the transport; the core only supplies field lists (from
//! the resolver), filter predicates (from the filter engine), and patch
//! payloads (from the pending-edit map).

use crate::error::Error;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default page when none is requested.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when none is requested.
pub const DEFAULT_LIMIT: u32 = 100;

///
/// FetchQuery
///
/// Parameter set for one item fetch. Serialized shape matches the host's
/// query-string contract.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FetchQuery {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,

    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Per-relation query parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep: Option<Value>,

    /// Synthetic alias map from the resolver; empty under current policy.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub alias: Map<String, Value>,
}

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for FetchQuery {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            filter: None,
            search: None,
            sort: Vec::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            deep: None,
            alias: Map::new(),
        }
    }
}

///
/// FetchMeta
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FetchMeta {
    #[serde(default)]
    pub filter_count: u64,
    #[serde(default)]
    pub total_count: u64,
}

///
/// FetchResponse
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FetchResponse {
    pub data: Vec<Value>,
    #[serde(default)]
    pub meta: FetchMeta,
}

///
/// ExportFormat
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[display("csv")]
    Csv,
    #[display("json")]
    Json,
    #[display("xml")]
    Xml,
    #[display("yaml")]
    Yaml,
}

///
/// DataApi
///
/// Host-implemented item transport. Network errors propagate unchanged;
/// the core never retries.
///

pub trait DataApi {
    /// Fetch a page of items from a collection.
    fn fetch(&self, collection: &str, query: &FetchQuery) -> Result<FetchResponse, Error>;

    /// Fetch one item by primary key.
    fn fetch_one(&self, collection: &str, id: &str, fields: &[String]) -> Result<Value, Error>;

    /// Apply a partial update to one item, returning the updated item.
    fn update(&self, collection: &str, id: &str, patch: Value) -> Result<Value, Error>;

    /// Create one item, returning it.
    fn create(&self, collection: &str, payload: Value) -> Result<Value, Error>;

    /// Delete one or more items by primary key.
    fn delete(&self, collection: &str, ids: &[String]) -> Result<(), Error>;

    /// Export items in the given format.
    fn export(
        &self,
        collection: &str,
        format: ExportFormat,
        query: &FetchQuery,
    ) -> Result<Vec<u8>, Error>;
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{ExportFormat, FetchQuery};
    use serde_json::json;

    #[test]
    fn fetch_query_defaults_and_serialized_shape() {
        let query = FetchQuery {
            fields: vec!["title".to_string()],
            filter: Some(json!({ "status": { "_eq": "published" } })),
            ..FetchQuery::default()
        };
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 100);

        let raw = serde_json::to_value(&query).unwrap();
        assert_eq!(raw["fields"], json!(["title"]));
        assert!(raw.get("search").is_none());
        assert!(raw.get("alias").is_none());
    }

    #[test]
    fn persisted_query_without_paging_gets_the_defaults() {
        let query: FetchQuery =
            serde_json::from_value(json!({ "fields": ["title"] })).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 100);
        assert_eq!(query.fields, vec!["title".to_string()]);
    }

    #[test]
    fn export_formats_render_as_lowercase_tokens() {
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
        assert_eq!(ExportFormat::Yaml.to_string(), "yaml");
    }
}
