use std::sync::Arc;

use storage::repository::TopicRepository;
use topics_core::model::{Topic, TopicDraft, TopicId};

use crate::Clock;
use crate::defaults::default_topic_drafts;
use crate::error::TopicServiceError;

/// Orchestrates topic lookups and learner progress updates.
#[derive(Clone)]
pub struct TopicService {
    clock: Clock,
    topics: Arc<dyn TopicRepository>,
}

impl TopicService {
    #[must_use]
    pub fn new(clock: Clock, topics: Arc<dyn TopicRepository>) -> Self {
        Self { clock, topics }
    }

    /// List topics in collection order, up to the given limit.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::Storage` if repository access fails.
    pub async fn list_topics(&self, limit: u32) -> Result<Vec<Topic>, TopicServiceError> {
        let topics = self.topics.list_topics(limit).await?;
        Ok(topics)
    }

    /// Fetch a topic by id. Returns `Ok(None)` when the topic does not exist.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::Storage` if repository access fails.
    pub async fn get_topic(&self, id: &TopicId) -> Result<Option<Topic>, TopicServiceError> {
        let topic = self.topics.get_topic(id).await?;
        Ok(topic)
    }

    /// Mark a topic as started and persist it.
    ///
    /// A not-started topic becomes in-progress; any other status is kept.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::NotFound` for an unknown id.
    /// Returns `TopicServiceError::Storage` if persistence fails.
    pub async fn start_topic(&self, id: &TopicId) -> Result<Topic, TopicServiceError> {
        let mut topic = self.require(id).await?;
        let before = topic.status();
        topic.start(self.clock.now());
        self.topics.upsert_topic(&topic).await?;
        tracing::info!(topic = %id, from = %before, to = %topic.status(), "topic started");
        Ok(topic)
    }

    /// Record the latest exam score for a topic.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::NotFound` for an unknown id.
    /// Returns `TopicServiceError::Topic` if the score is above 100.
    /// Returns `TopicServiceError::Storage` if persistence fails.
    pub async fn record_exam_score(
        &self,
        id: &TopicId,
        score: u8,
    ) -> Result<Topic, TopicServiceError> {
        let mut topic = self.require(id).await?;
        topic.record_exam_score(score, self.clock.now())?;
        self.topics.upsert_topic(&topic).await?;
        tracing::info!(topic = %id, score, "exam score recorded");
        Ok(topic)
    }

    /// Validate and upsert a batch of drafts. Nothing is written if any draft is invalid.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::Topic` for the first invalid draft.
    /// Returns `TopicServiceError::Storage` if persistence fails.
    pub async fn import_topics(&self, drafts: Vec<TopicDraft>) -> Result<usize, TopicServiceError> {
        let topics = drafts
            .into_iter()
            .map(TopicDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        for topic in &topics {
            self.topics.upsert_topic(topic).await?;
        }
        tracing::info!(count = topics.len(), "imported topics");
        Ok(topics.len())
    }

    /// Seed the bundled starter topics when the collection is empty.
    ///
    /// Returns `true` if topics were seeded.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError` if the repository fails or the bundled data is invalid.
    pub async fn ensure_default_topics(&self) -> Result<bool, TopicServiceError> {
        if self.topics.count_topics().await? > 0 {
            return Ok(false);
        }
        self.import_topics(default_topic_drafts()?).await?;
        Ok(true)
    }

    async fn require(&self, id: &TopicId) -> Result<Topic, TopicServiceError> {
        self.topics
            .get_topic(id)
            .await?
            .ok_or_else(|| TopicServiceError::NotFound(id.clone()))
    }
}
