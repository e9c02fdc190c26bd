use crate::error::AppError;
use crate::models::{WelcomeRecord, WELCOME_KEY};
use crate::services::WelcomeStore;
use async_trait::async_trait;
use mongodb::{
    bson::doc, options::ReplaceOptions, Client as MongoClient, Collection, Database,
};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn welcome(&self) -> Collection<WelcomeRecord> {
        self.db.collection("welcome")
    }
}

/// MongoDB-backed store. One document under the fixed key; `put` is an
/// unconditional upsert, `get` a point read.
#[derive(Clone)]
pub struct MongoStore {
    db: MongoDb,
}

impl MongoStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WelcomeStore for MongoStore {
    async fn put(&self, record: WelcomeRecord) -> Result<(), AppError> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.db
            .welcome()
            .replace_one(doc! { "_id": WELCOME_KEY }, record, options)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn get(&self) -> Result<WelcomeRecord, AppError> {
        self.db
            .welcome()
            .find_one(doc! { "_id": WELCOME_KEY }, None)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No document at key {}", WELCOME_KEY)))
    }

    async fn health(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
