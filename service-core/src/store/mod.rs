//! Read-only access to schema-less document collections.
//!
//! Handlers hold an `Arc<dyn DocumentStore>` and never see the driver
//! directly. [`connect`] is the only way the services obtain a store and it
//! never fails: a store that could not be built answers every read with
//! [`StoreError::Unavailable`].

mod json;
mod memory;
mod mongo;

pub use json::{bson_to_json, document_to_json};
pub use memory::InMemoryStore;
pub use mongo::MongoStore;

use crate::config::MongoConfig;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Query(#[from] mongodb::error::Error),

    #[error("{0}")]
    Unavailable(String),
}

impl StoreError {
    /// Plain error text, as returned to clients that only see the message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Structured rendering of the whole error.
    pub fn detail(&self) -> Value {
        match self {
            StoreError::Query(err) => {
                let mut labels: Vec<&String> = err.labels().iter().collect();
                labels.sort();
                json!({
                    "name": "MongoError",
                    "message": err.to_string(),
                    "labels": labels,
                })
            }
            StoreError::Unavailable(reason) => json!({
                "name": "StoreUnavailable",
                "message": reason,
                "labels": [],
            }),
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document of `collection`, unfiltered, in store order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Stands in for a client that could not be created.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn find_all(&self, _collection: &str) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

/// Builds the store and fires a single background ping whose outcome is
/// only logged. Callers start serving immediately.
pub async fn connect(config: &MongoConfig) -> Arc<dyn DocumentStore> {
    match MongoStore::connect(&config.uri, &config.database).await {
        Ok(store) => {
            let store = Arc::new(store);
            let probe = store.clone();
            tokio::spawn(async move {
                match probe.ping().await {
                    Ok(()) => tracing::info!("Connected to MongoDB"),
                    Err(e) => tracing::error!(error = %e, "MongoDB connection error"),
                }
            });
            store
        }
        Err(e) => {
            tracing::error!(error = %e, "MongoDB connection error");
            Arc::new(UnavailableStore::new(e.message()))
        }
    }
}
