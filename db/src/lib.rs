pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;

use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::info;

/// Name of the lesson catalog collection.
pub const LESSONS: &str = "lessons";
/// Name of the order collection.
pub const ORDERS: &str = "orders";

/// Handle to the document store.
///
/// Constructed once at process start and injected into handlers through the
/// application state; there is no hidden module-level connection. Cloning is
/// cheap, all clones share the same underlying client.
#[derive(Clone)]
pub struct Store {
    client: Client,
    database: Database,
}

impl Store {
    /// Builds a store handle without establishing a connection. The
    /// underlying client connects lazily on first operation.
    ///
    /// Prefer [`Store::connect`] at process start so an unreachable
    /// deployment fails fast; this constructor exists for callers that only
    /// exercise paths which never reach the store.
    pub async fn open(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(StoreError::Unavailable)?;
        let database = client.database(db_name);
        Ok(Self { client, database })
    }

    /// Opens the store and verifies the deployment is reachable with a
    /// single `ping`. One attempt, no retry or backoff; an unreachable
    /// store is a startup failure.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let store = Self::open(uri, db_name).await?;
        store
            .database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::Unavailable)?;
        info!(db = %db_name, "Connected to document store");
        Ok(store)
    }

    /// Resolves a named typed collection handle.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Terminates the underlying client. Called during graceful shutdown.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("Document store connection closed");
    }
}
