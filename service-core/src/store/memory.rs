use super::{DocumentStore, StoreError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// Collections held in process memory. Reads of an unknown collection
/// return no documents, like the database does.
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
    failure: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            collections: RwLock::default(),
            failure: Some(reason.into()),
        }
    }

    pub fn with_collection(self, name: &str, documents: Vec<Value>) -> Self {
        self.write().insert(name.to_string(), documents);
        self
    }

    pub fn insert(&self, name: &str, document: Value) {
        self.write()
            .entry(name.to_string())
            .or_default()
            .push(document);
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<Value>>> {
        self.collections
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        self.check()?;
        let collections = self
            .collections
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
