use crate::models::timestamp_now;
use crate::schema::Collection;
use crate::StoreError;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

const RECORD_ID_LEN: usize = 15;

/// A stored row of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub collection: String,
    pub data: Map<String, Value>,
    pub created: String,
    pub updated: String,
}

impl Record {
    /// The record as a flat JSON object, the shape the list endpoint returns.
    pub fn to_json(&self) -> Value {
        let mut object = self.data.clone();
        object.insert("id".to_owned(), Value::from(self.id.clone()));
        object.insert("created".to_owned(), Value::from(self.created.clone()));
        object.insert("updated".to_owned(), Value::from(self.updated.clone()));
        Value::Object(object)
    }
}

/// Operations migrations need from the hosted store.
pub trait App {
    fn find_collection(&self, name: &str) -> Option<Collection>;

    /// Creates the collection or replaces its schema. Values of fields that
    /// no longer exist are dropped from the stored records.
    fn save_collection(&mut self, collection: Collection) -> Result<(), StoreError>;

    fn delete_collection(&mut self, name: &str) -> Result<(), StoreError>;

    fn find_records(&self, collection: &str) -> Result<Vec<Record>, StoreError>;

    /// Validates `data` against the collection and stores it as a new record.
    fn insert_record(
        &mut self,
        collection: &str,
        data: Map<String, Value>,
    ) -> Result<Record, StoreError>;

    fn delete_record(&mut self, collection: &str, id: &str) -> Result<(), StoreError>;

    fn applied_migrations(&self) -> BTreeSet<i64>;

    fn set_migration_applied(&mut self, version: i64, applied: bool);
}

/// An in-process [`App`], used for tests and local seeding.
#[derive(Debug, Default, Clone)]
pub struct MemoryApp {
    collections: BTreeMap<String, (Collection, Vec<Record>)>,
    applied: BTreeSet<i64>,
}

impl MemoryApp {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut (Collection, Vec<Record>), StoreError> {
        self.collections
            .get_mut(name)
            .ok_or_else(|| StoreError::CollectionNotFound(name.to_owned()))
    }
}

impl App for MemoryApp {
    fn find_collection(&self, name: &str) -> Option<Collection> {
        self.collections.get(name).map(|(c, _)| c.clone())
    }

    fn save_collection(&mut self, collection: Collection) -> Result<(), StoreError> {
        let name = collection.name.clone();

        match self.collections.get_mut(&name) {
            Some((schema, records)) => {
                for record in records.iter_mut() {
                    record.data.retain(|key, _| collection.field(key).is_some());
                }
                *schema = collection;
            }
            None => {
                self.collections.insert(name, (collection, Vec::new()));
            }
        }

        Ok(())
    }

    fn delete_collection(&mut self, name: &str) -> Result<(), StoreError> {
        self.collections
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::CollectionNotFound(name.to_owned()))
    }

    fn find_records(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        self.collections
            .get(collection)
            .map(|(_, records)| records.clone())
            .ok_or_else(|| StoreError::CollectionNotFound(collection.to_owned()))
    }

    fn insert_record(
        &mut self,
        collection: &str,
        data: Map<String, Value>,
    ) -> Result<Record, StoreError> {
        let (schema, records) = self.entry_mut(collection)?;
        schema.validate(&data)?;

        let now = timestamp_now();
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(RECORD_ID_LEN);

        let record = Record {
            id,
            collection: collection.to_owned(),
            data,
            created: now.clone(),
            updated: now,
        };

        records.push(record.clone());
        Ok(record)
    }

    fn delete_record(&mut self, collection: &str, id: &str) -> Result<(), StoreError> {
        let (_, records) = self.entry_mut(collection)?;

        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(StoreError::RecordNotFound {
                collection: collection.to_owned(),
                id: id.to_owned(),
            }),
        }
    }

    fn applied_migrations(&self) -> BTreeSet<i64> {
        self.applied.clone()
    }

    fn set_migration_applied(&mut self, version: i64, applied: bool) {
        if applied {
            self.applied.insert(version);
        } else {
            self.applied.remove(&version);
        }
    }
}
