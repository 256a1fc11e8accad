use async_trait::async_trait;
use bson::{oid::ObjectId, DateTime as BsonDateTime};
use tokio::sync::RwLock;

use crate::database::store::DocumentStore;
use crate::errors::{AppError, Result};
use crate::models::engine::Engine;
use crate::models::match_record::RawMatch;

/// In-process stand-in for the document database.
#[derive(Default)]
pub struct MemoryStore {
    engines: RwLock<Vec<Engine>>,
    matches: RwLock<Vec<RawMatch>>,
    read_failure: RwLock<Option<String>>,
    write_failure: RwLock<Option<String>>,
    lookups: RwLock<Vec<ObjectId>>,
}

fn transport_error(message: &str) -> AppError {
    AppError::MongoDB(
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message.to_string()).into(),
    )
}

impl MemoryStore {
    pub async fn add_engine(&self, name: &str, rating: f64) -> ObjectId {
        let id = ObjectId::new();
        self.engines.write().await.push(Engine {
            id: Some(id),
            name: name.to_string(),
            rating,
            stable: true,
            games: 10,
            author: "tester".to_string(),
        });
        id
    }

    pub async fn add_match(
        &self,
        engine1: Option<ObjectId>,
        engine2: Option<ObjectId>,
        diff: f64,
        date_secs: i64,
    ) {
        self.matches.write().await.push(RawMatch {
            id: Some(ObjectId::new()),
            engine1,
            engine2,
            wins: 10,
            draws: 5,
            losses: 5,
            total: 20,
            time_control: "10+0.1".to_string(),
            diff,
            date: BsonDateTime::from_millis(date_secs * 1000),
        });
    }

    pub async fn fail_reads(&self, message: &str) {
        *self.read_failure.write().await = Some(message.to_string());
    }

    pub async fn fail_writes(&self, message: &str) {
        *self.write_failure.write().await = Some(message.to_string());
    }

    pub async fn engines(&self) -> Vec<Engine> {
        self.engines.read().await.clone()
    }

    /// Ids passed to `find_engine`, in call order.
    pub async fn lookups(&self) -> Vec<ObjectId> {
        self.lookups.read().await.clone()
    }

    async fn check_reads(&self) -> Result<()> {
        match self.read_failure.read().await.as_deref() {
            Some(message) => Err(transport_error(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_engines(&self) -> Result<Vec<Engine>> {
        self.check_reads().await?;
        Ok(self.engines.read().await.clone())
    }

    async fn list_raw_matches(&self) -> Result<Vec<RawMatch>> {
        self.check_reads().await?;
        Ok(self.matches.read().await.clone())
    }

    async fn find_engine(&self, id: &ObjectId) -> Result<Option<Engine>> {
        self.check_reads().await?;
        self.lookups.write().await.push(*id);
        Ok(self
            .engines
            .read()
            .await
            .iter()
            .find(|engine| engine.id.as_ref() == Some(id))
            .cloned())
    }

    async fn insert_engine(&self, engine: &Engine) -> Result<ObjectId> {
        if let Some(message) = self.write_failure.read().await.as_deref() {
            return Err(transport_error(message));
        }
        let id = ObjectId::new();
        let mut stored = engine.clone();
        stored.id = Some(id);
        self.engines.write().await.push(stored);
        Ok(id)
    }
}
