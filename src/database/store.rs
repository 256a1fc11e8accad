use std::sync::Arc;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};

use crate::errors::{AppError, Result};
use crate::models::engine::{Engine, NewEngine};
use crate::models::match_record::{Match, RawMatch};
use crate::services::match_resolver::resolve_matches;

pub const ENGINES_COLLECTION: &str = "engines";
pub const MATCHES_COLLECTION: &str = "matches";

/// Raw document access for the two collections the app reads.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_engines(&self) -> Result<Vec<Engine>>;

    async fn list_raw_matches(&self) -> Result<Vec<RawMatch>>;

    async fn find_engine(&self, id: &ObjectId) -> Result<Option<Engine>>;

    async fn insert_engine(&self, engine: &Engine) -> Result<ObjectId>;
}

#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn engines(&self) -> Collection<Engine> {
        self.db.collection(ENGINES_COLLECTION)
    }

    fn matches(&self) -> Collection<RawMatch> {
        self.db.collection(MATCHES_COLLECTION)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn list_engines(&self) -> Result<Vec<Engine>> {
        let cursor = self.engines().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_raw_matches(&self) -> Result<Vec<RawMatch>> {
        let cursor = self.matches().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_engine(&self, id: &ObjectId) -> Result<Option<Engine>> {
        let id = *id;
        let filter = doc! { "_id": id };
        Ok(self.engines().find_one(filter).await?)
    }

    async fn insert_engine(&self, engine: &Engine) -> Result<ObjectId> {
        let result = self.engines().insert_one(engine).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::invalid_data(format!(
                "Inserted engine has a non-ObjectId key: {}",
                result.inserted_id
            ))
        })
    }
}

/// Typed operations the pages use; every call goes to the store.
#[derive(Clone)]
pub struct RecordStoreClient {
    store: Arc<dyn DocumentStore>,
}

impl RecordStoreClient {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn fetch_engines(&self) -> Result<Vec<Engine>> {
        let engines = self.store.list_engines().await?;
        tracing::debug!("Fetched {} engines", engines.len());
        Ok(engines)
    }

    pub async fn fetch_matches(&self) -> Result<Vec<Match>> {
        let raw = self.store.list_raw_matches().await?;
        tracing::debug!("Fetched {} raw matches", raw.len());
        resolve_matches(self.store.as_ref(), raw).await
    }

    pub async fn create_engine(&self, new_engine: NewEngine) -> Result<ObjectId> {
        let engine = new_engine.into_document();
        let id = self.store.insert_engine(&engine).await?;
        tracing::info!("✅ Created engine '{}' ({})", engine.name, id);
        Ok(id)
    }
}
