use super::{DocumentStore, StoreError, document_to_json};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client as MongoClient, Collection, Database,
    bson::{Document, doc},
};
use serde_json::Value;

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Parses `uri` and creates the client. The driver connects lazily, so
    /// success here says nothing about server reachability.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        tracing::info!(database = %database, "Creating MongoDB client");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            StoreError::from(e)
        })?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    /// Passthrough binding: any document shape is accepted.
    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let cursor = self.collection(collection).find(None, None).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        tracing::debug!(collection = %collection, count = documents.len(), "Fetched documents");

        Ok(documents.into_iter().map(document_to_json).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }
}
