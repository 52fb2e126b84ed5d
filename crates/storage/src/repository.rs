use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use topics_core::model::{Topic, TopicId};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the topic collection.
///
/// Listings come back in first-insert order; updating a topic keeps its place.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Persist a new topic or replace the stored one with the same id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the topic cannot be stored.
    async fn upsert_topic(&self, topic: &Topic) -> Result<(), StorageError>;

    /// Fetch a topic by id. Returns `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend or decoding failures.
    async fn get_topic(&self, id: &TopicId) -> Result<Option<Topic>, StorageError>;

    /// List up to `limit` topics in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend or decoding failures.
    async fn list_topics(&self, limit: u32) -> Result<Vec<Topic>, StorageError>;

    /// Number of stored topics.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn count_topics(&self) -> Result<u64, StorageError>;
}

#[derive(Default)]
struct TopicTable {
    next_seq: u64,
    rows: HashMap<TopicId, (u64, Topic)>,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    topics: Arc<Mutex<TopicTable>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TopicRepository for InMemoryRepository {
    async fn upsert_topic(&self, topic: &Topic) -> Result<(), StorageError> {
        let mut guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let table = &mut *guard;
        let existing = table.rows.get(topic.id()).map(|(seq, _)| *seq);
        let seq = existing.unwrap_or_else(|| {
            table.next_seq += 1;
            table.next_seq
        });
        table.rows.insert(topic.id().clone(), (seq, topic.clone()));
        Ok(())
    }

    async fn get_topic(&self, id: &TopicId) -> Result<Option<Topic>, StorageError> {
        let guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.rows.get(id).map(|(_, topic)| topic.clone()))
    }

    async fn list_topics(&self, limit: u32) -> Result<Vec<Topic>, StorageError> {
        let guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut rows: Vec<&(u64, Topic)> = guard.rows.values().collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|(_, topic)| topic.clone())
            .collect())
    }

    async fn count_topics(&self) -> Result<u64, StorageError> {
        let guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.rows.len() as u64)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub topics: Arc<dyn TopicRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let topics: Arc<dyn TopicRepository> = Arc::new(InMemoryRepository::new());
        Self { topics }
    }
}
