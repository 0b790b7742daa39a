//! Read-only access to a MongoDB database.
//!
//! The probe only needs four queries, so they sit behind the
//! [`DocumentSource`] trait. [`MongoSource`] answers them with the async
//! driver on a private current-thread runtime; tests use in-memory sources.

use mongodb::bson::{doc, Document};
use mongodb::{Client, Database};
use tokio::runtime::{Builder, Runtime};

use crate::error::{ProbeError, Result};
use crate::secrets::redact_uri;

/// A database the probe can inspect.
pub trait DocumentSource {
    /// Name of the selected database.
    fn database_name(&self) -> &str;

    /// Names of all collections, in server enumeration order.
    fn collection_names(&self) -> Result<Vec<String>>;

    /// Current number of documents in a collection.
    fn count_documents(&self, collection: &str) -> Result<u64>;

    /// One arbitrary document from a collection, if any exists.
    fn sample(&self, collection: &str) -> Result<Option<Document>>;
}

/// [`DocumentSource`] backed by a live MongoDB deployment.
pub struct MongoSource {
    // Fields drop in order: driver handles go before the runtime they run on.
    database: Database,
    client: Client,
    runtime: Runtime,
}

impl MongoSource {
    /// Create a client for `uri` and select the database the URI names.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first query rather than here.
    pub fn connect(uri: &str) -> Result<Self> {
        tracing::debug!("Creating MongoDB client for {}", redact_uri(uri));

        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProbeError::Runtime)?;

        let client = runtime.block_on(Client::with_uri_str(uri))?;
        let Some(database) = client.default_database() else {
            runtime.block_on(async { client.shutdown().await });
            return Err(ProbeError::NoDefaultDatabase);
        };

        tracing::info!("Selected database {}", database.name());
        Ok(Self {
            database,
            client,
            runtime,
        })
    }
}

impl Drop for MongoSource {
    fn drop(&mut self) {
        // Background monitors live on our runtime; stop them while it still exists.
        let client = self.client.clone();
        self.runtime.block_on(async { client.shutdown().await });
    }
}

impl DocumentSource for MongoSource {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    fn collection_names(&self) -> Result<Vec<String>> {
        let names = self
            .runtime
            .block_on(async { self.database.list_collection_names().await })?;
        tracing::debug!("Found {} collections", names.len());
        Ok(names)
    }

    fn count_documents(&self, collection: &str) -> Result<u64> {
        let coll = self.database.collection::<Document>(collection);
        let count = self
            .runtime
            .block_on(async { coll.count_documents(doc! {}).await })?;
        Ok(count)
    }

    fn sample(&self, collection: &str) -> Result<Option<Document>> {
        let coll = self.database.collection::<Document>(collection);
        let sample = self
            .runtime
            .block_on(async { coll.find_one(doc! {}).await })?;
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_requires_database_in_uri() {
        // No server is contacted: the client is lazy and the URI names no database.
        let err = MongoSource::connect("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=100")
            .err()
            .unwrap();
        assert!(matches!(err, ProbeError::NoDefaultDatabase));
    }

    #[test]
    fn connect_rejects_malformed_uri() {
        let err = MongoSource::connect("not-a-connection-string").err().unwrap();
        assert!(matches!(err, ProbeError::Database(_)));
    }

    #[test]
    fn connect_selects_named_database() {
        let source =
            MongoSource::connect("mongodb://127.0.0.1:1/inventory?serverSelectionTimeoutMS=100")
                .unwrap();
        assert_eq!(source.database_name(), "inventory");
    }
}
