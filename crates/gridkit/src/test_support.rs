//! Shared in-memory fixtures for unit tests.

use crate::{
    api::{DataApi, ExportFormat, FetchMeta, FetchQuery, FetchResponse},
    error::Error,
    field::FieldDescriptor,
    stores::{FieldStore, Relation, RelationStore},
};
use serde_json::{Value, json};
use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
};

///
/// StaticFields
///
/// Fixed field metadata keyed by collection and field key.
///

#[derive(Debug, Default)]
pub(crate) struct StaticFields {
    fields: BTreeMap<(String, String), FieldDescriptor>,
}

impl StaticFields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, collection: &str, descriptor: FieldDescriptor) -> Self {
        self.fields
            .insert((collection.to_string(), descriptor.key.clone()), descriptor);
        self
    }
}

impl FieldStore for StaticFields {
    fn field(&self, collection: &str, key: &str) -> Option<FieldDescriptor> {
        self.fields
            .get(&(collection.to_string(), key.to_string()))
            .cloned()
    }
}

///
/// StaticRelations
///
/// Fixed relation records keyed by collection and field.
///

#[derive(Debug, Default)]
pub(crate) struct StaticRelations {
    relations: Vec<Relation>,
}

impl StaticRelations {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, collection: &str, field: &str, related: Option<&str>) -> Self {
        self.relations.push(Relation {
            collection: collection.to_string(),
            field: field.to_string(),
            related_collection: related.map(ToString::to_string),
        });
        self
    }
}

impl RelationStore for StaticRelations {
    fn relations_for_field(&self, collection: &str, key: &str) -> Vec<Relation> {
        self.relations
            .iter()
            .filter(|r| r.collection == collection && r.field == key)
            .cloned()
            .collect()
    }
}

///
/// MockApi
///
/// Recording transport double. Mutations are stored for assertion;
/// `failing` makes every call fail, `fail_creates_for` fails creates into
/// one collection only.
///

#[derive(Debug, Default)]
pub(crate) struct MockApi {
    items: RefCell<BTreeMap<(String, String), Value>>,
    creates: RefCell<Vec<(String, Value)>>,
    updates: RefCell<Vec<(String, String, Value)>>,
    deletes: RefCell<Vec<(String, Vec<String>)>>,
    fail_with: Option<Error>,
    failing_create_collections: RefCell<BTreeSet<String>>,
}

impl MockApi {
    pub(crate) fn failing(error: Error) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    pub(crate) fn with_item(self, collection: &str, id: &str, item: Value) -> Self {
        self.items
            .borrow_mut()
            .insert((collection.to_string(), id.to_string()), item);
        self
    }

    pub(crate) fn fail_creates_for(self, collection: &str) -> Self {
        self.failing_create_collections
            .borrow_mut()
            .insert(collection.to_string());
        self
    }

    pub(crate) fn creates(&self) -> Vec<(String, Value)> {
        self.creates.borrow().clone()
    }

    pub(crate) fn updates(&self) -> Vec<(String, String, Value)> {
        self.updates.borrow().clone()
    }

    pub(crate) fn deletes(&self) -> Vec<(String, Vec<String>)> {
        self.deletes.borrow().clone()
    }

    fn check_failure(&self) -> Result<(), Error> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl DataApi for MockApi {
    fn fetch(&self, collection: &str, _query: &FetchQuery) -> Result<FetchResponse, Error> {
        self.check_failure()?;
        let data = self
            .items
            .borrow()
            .iter()
            .filter(|((c, _), _)| c == collection)
            .map(|(_, item)| item.clone())
            .collect();
        Ok(FetchResponse {
            data,
            meta: FetchMeta::default(),
        })
    }

    fn fetch_one(&self, collection: &str, id: &str, _fields: &[String]) -> Result<Value, Error> {
        self.check_failure()?;
        self.items
            .borrow()
            .get(&(collection.to_string(), id.to_string()))
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    fn update(&self, collection: &str, id: &str, patch: Value) -> Result<Value, Error> {
        self.check_failure()?;
        self.updates
            .borrow_mut()
            .push((collection.to_string(), id.to_string(), patch.clone()));

        let key = (collection.to_string(), id.to_string());
        let mut items = self.items.borrow_mut();
        if let (Some(Value::Object(item)), Value::Object(patch)) = (items.get_mut(&key), &patch) {
            for (field, value) in patch {
                item.insert(field.clone(), value.clone());
            }
            return Ok(Value::Object(item.clone()));
        }

        Ok(patch)
    }

    fn create(&self, collection: &str, payload: Value) -> Result<Value, Error> {
        self.check_failure()?;
        if self.failing_create_collections.borrow().contains(collection) {
            return Err(Error::api(format!("create into {collection} refused")));
        }

        self.creates
            .borrow_mut()
            .push((collection.to_string(), payload.clone()));

        let mut created = payload;
        if let Value::Object(obj) = &mut created {
            if !obj.contains_key("id") {
                let next = self.creates.borrow().len() + 99;
                obj.insert("id".to_string(), json!(next));
            }
        }

        Ok(created)
    }

    fn delete(&self, collection: &str, ids: &[String]) -> Result<(), Error> {
        self.check_failure()?;
        self.deletes
            .borrow_mut()
            .push((collection.to_string(), ids.to_vec()));
        Ok(())
    }

    fn export(
        &self,
        _collection: &str,
        format: ExportFormat,
        _query: &FetchQuery,
    ) -> Result<Vec<u8>, Error> {
        self.check_failure()?;
        Ok(format.to_string().into_bytes())
    }
}
