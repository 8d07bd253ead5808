use bson::{doc, Bson, Document};
use futures::stream::TryStreamExt;
use mongodb::Client;
use tracing::{debug, info};

use crate::error::{Result, StoreError};

/// Connection settings for one store instance.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

/// Storage figures reported by `check-health`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStats {
    pub document_count: u64,
    pub storage_size_bytes: i64,
}

/// Gateway to the one configured statement collection.
///
/// One instance is connected per command invocation and released on the
/// handler's exit path. Nothing here validates records; the validator is
/// the sole gate before writes. Filters and pipelines are passed through
/// verbatim.
pub struct StatementStore {
    client: Client,
    database: String,
    collection: String,
}

impl StatementStore {
    /// Connect and verify the server with a `ping`.
    ///
    /// A short server-selection timeout is appended to the URI so an
    /// unreachable server fails fast instead of hanging the command.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let timeout_uri = if config.uri.contains('?') {
            format!(
                "{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000",
                config.uri
            )
        } else {
            format!(
                "{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000",
                config.uri
            )
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(StoreError::Connection)?;

        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::Connection)?;

        info!(
            database = %config.database,
            collection = %config.collection,
            "connected to statement store"
        );

        Ok(Self {
            client,
            database: config.database.clone(),
            collection: config.collection.clone(),
        })
    }

    /// Release the connection. Each handler calls this on its own exit path.
    pub async fn disconnect(self) {
        debug!("disconnecting statement store");
        self.client.shutdown().await;
    }

    fn statements(&self) -> mongodb::Collection<Document> {
        self.client
            .database(&self.database)
            .collection::<Document>(&self.collection)
    }

    /// Insert one pre-validated record. Returns the inserted count (1).
    pub async fn insert_one(&self, record: Document) -> Result<u64> {
        self.statements()
            .insert_one(record)
            .await
            .map_err(StoreError::Query)?;
        Ok(1)
    }

    /// Insert a batch of pre-validated records. Returns the inserted count.
    pub async fn insert_many(&self, records: Vec<Document>) -> Result<u64> {
        let result = self
            .statements()
            .insert_many(records)
            .await
            .map_err(StoreError::Query)?;
        Ok(result.inserted_ids.len() as u64)
    }

    /// Find with a verbatim filter.
    pub async fn find(&self, filter: Document) -> Result<Vec<Document>> {
        let cursor = self
            .statements()
            .find(filter)
            .await
            .map_err(StoreError::Query)?;
        cursor.try_collect().await.map_err(StoreError::Query)
    }

    /// Run a verbatim aggregation pipeline.
    pub async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>> {
        let cursor = self
            .statements()
            .aggregate(pipeline)
            .await
            .map_err(StoreError::Query)?;
        cursor.try_collect().await.map_err(StoreError::Query)
    }

    /// Distinct values of one field path across the collection.
    pub async fn distinct(&self, field_path: &str) -> Result<Vec<Bson>> {
        self.statements()
            .distinct(field_path, doc! {})
            .await
            .map_err(StoreError::Query)
    }

    /// Total number of stored statements.
    pub async fn count_all(&self) -> Result<u64> {
        self.statements()
            .count_documents(doc! {})
            .await
            .map_err(StoreError::Query)
    }

    /// Apply a partial update to the first matching document and return the
    /// matched count.
    ///
    /// Zero matches is a success, not an error: callers report the count and
    /// the operator decides whether "0 matched" was expected.
    pub async fn update_one(&self, filter: Document, patch: Document) -> Result<u64> {
        let result = self
            .statements()
            .update_one(filter, patch)
            .await
            .map_err(StoreError::Query)?;
        Ok(result.matched_count)
    }

    /// Delete every record in the collection and return the deleted count.
    /// This is the only deletion primitive; there is no selective delete.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = self
            .statements()
            .delete_many(doc! {})
            .await
            .map_err(StoreError::Query)?;
        Ok(result.deleted_count)
    }

    /// Storage figures for health reporting, from `collStats`.
    pub async fn stats_summary(&self) -> Result<StorageStats> {
        let stats = self
            .client
            .database(&self.database)
            .run_command(doc! { "collStats": &self.collection })
            .await
            .map_err(StoreError::Query)?;

        Ok(StorageStats {
            document_count: numeric(&stats, "count").unwrap_or(0) as u64,
            storage_size_bytes: numeric(&stats, "storageSize").unwrap_or(0),
        })
    }
}

// collStats reports sizes as int32, int64, or double depending on server
// version and size.
fn numeric(doc: &Document, key: &str) -> Option<i64> {
    match doc.get(key)? {
        Bson::Int32(n) => Some(i64::from(*n)),
        Bson::Int64(n) => Some(*n),
        Bson::Double(n) => Some(*n as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Operations against a live server are exercised end to end via the CLI;
    // unit coverage here sticks to the pure pieces.

    #[test]
    fn numeric_reads_all_bson_number_widths() {
        let stats = doc! { "count": 42_i32, "storageSize": 1_234_567_i64, "avgObjSize": 99.5 };
        assert_eq!(numeric(&stats, "count"), Some(42));
        assert_eq!(numeric(&stats, "storageSize"), Some(1_234_567));
        assert_eq!(numeric(&stats, "avgObjSize"), Some(99));
        assert_eq!(numeric(&stats, "missing"), None);
    }
}
