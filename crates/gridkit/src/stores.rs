//! Metadata store boundary.
//!
//! The host owns field and relation metadata; the core consumes it through
//! these traits and degrades gracefully (unmodified field keys, unknown
//! support) when lookups fail.

use crate::field::FieldDescriptor;
use serde::{Deserialize, Serialize};

///
/// Relation
///
/// One relation record as known to the host.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Relation {
    /// Collection the relation is declared on.
    pub collection: String,

    /// Field carrying the relation.
    pub field: String,

    /// Target collection, when the relation has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_collection: Option<String>,
}

///
/// FieldStore
///

pub trait FieldStore {
    /// Descriptor for a field in a collection, if known.
    fn field(&self, collection: &str, key: &str) -> Option<FieldDescriptor>;
}

///
/// RelationStore
///

pub trait RelationStore {
    /// Relations declared for a field, possibly empty.
    fn relations_for_field(&self, collection: &str, key: &str) -> Vec<Relation>;
}
