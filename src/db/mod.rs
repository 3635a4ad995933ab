/// Document store access layer
///
/// A thin facade over the MongoDB connection: one logical operation maps to
/// one physical operation against the store. No transactions, batching,
/// caching or retries; callers own their fallback behavior.
use async_trait::async_trait;
use bson::Document;
use futures::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{Client, Database};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Trait defining the interface to the document store. The production
/// implementation is [`MongoStore`]; tests substitute an in-memory fake.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch documents of the given kind matching `filter`, in storage
    /// default order, capped at `limit`.
    async fn get_documents(
        &self,
        kind: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>>;

    /// Insert one document under the given kind and return the generated
    /// identifier as a string.
    async fn create_document(&self, kind: &str, document: Document) -> Result<String>;

    /// List collection names in the store, for the diagnostic endpoint.
    async fn list_collection_names(&self) -> Result<Vec<String>>;
}

/// MongoDB-backed document store. Record kinds map directly to collection
/// names.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Build a store from configuration. Returns `None` when the connection
    /// string or database name is not configured; the caller decides how to
    /// degrade.
    pub async fn connect(config: &DatabaseConfig) -> Result<Option<Self>> {
        let (Some(url), Some(name)) = (&config.url, &config.name) else {
            return Ok(None);
        };

        let client = Client::with_uri_str(url).await?;
        Ok(Some(Self::new(client.database(name))))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn get_documents(
        &self,
        kind: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self
            .database
            .collection::<Document>(kind)
            .find(filter, options)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn create_document(&self, kind: &str, document: Document) -> Result<String> {
        let result = self
            .database
            .collection::<Document>(kind)
            .insert_one(document, None)
            .await?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };

        Ok(id)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        Ok(self.database.list_collection_names(None).await?)
    }
}
