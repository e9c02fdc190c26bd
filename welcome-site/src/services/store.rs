use crate::error::AppError;
use crate::models::{WelcomeRecord, WELCOME_KEY};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Document-store seam consumed by the controller.
///
/// `put` overwrites the record under its fixed key; `get` fails with
/// `AppError::NotFound` when nothing has been written yet. Connectivity
/// failures surface as `AppError::DatabaseError`.
#[async_trait]
pub trait WelcomeStore: Send + Sync {
    async fn put(&self, record: WelcomeRecord) -> Result<(), AppError>;
    async fn get(&self) -> Result<WelcomeRecord, AppError>;
    /// Backend reachability probe for the health endpoint. An empty store
    /// is healthy; only connectivity failures are errors.
    async fn health(&self) -> Result<(), AppError>;
}

/// In-process backend for development and tests. Last writer wins, same as
/// the external store.
#[derive(Default)]
pub struct MemoryStore {
    record: RwLock<Option<WelcomeRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WelcomeStore for MemoryStore {
    async fn put(&self, record: WelcomeRecord) -> Result<(), AppError> {
        *self.record.write().await = Some(record);
        Ok(())
    }

    async fn get(&self) -> Result<WelcomeRecord, AppError> {
        self.record
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No document at key {}", WELCOME_KEY)))
    }

    async fn health(&self) -> Result<(), AppError> {
        Ok(())
    }
}
