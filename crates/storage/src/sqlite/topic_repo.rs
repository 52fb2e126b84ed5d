use topics_core::model::{Topic, TopicId};

use super::SqliteRepository;
use super::mapping::{difficulty_column, map_topic_row, ser};
use crate::repository::{StorageError, TopicRepository};

const TOPIC_COLUMNS: &str = "id, name, description, difficulty, status, progress, problems_solved, total_problems, estimated_time, exam_score, last_activity_at";

#[async_trait::async_trait]
impl TopicRepository for SqliteRepository {
    async fn upsert_topic(&self, topic: &Topic) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO topics (id, name, description, difficulty, status, progress, problems_solved, total_problems, estimated_time, exam_score, last_activity_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                difficulty = excluded.difficulty,
                status = excluded.status,
                progress = excluded.progress,
                problems_solved = excluded.problems_solved,
                total_problems = excluded.total_problems,
                estimated_time = excluded.estimated_time,
                exam_score = excluded.exam_score,
                last_activity_at = excluded.last_activity_at
            ",
        )
        .bind(topic.id().as_str())
        .bind(topic.name())
        .bind(topic.description())
        .bind(difficulty_column(topic.difficulty_label()))
        .bind(topic.status().as_str())
        .bind(i64::from(topic.progress()))
        .bind(i64::from(topic.problems().solved()))
        .bind(i64::from(topic.problems().total()))
        .bind(topic.estimated_time())
        .bind(topic.exam_score().map(i64::from))
        .bind(topic.last_activity_at())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn get_topic(&self, id: &TopicId) -> Result<Option<Topic>, StorageError> {
        let sql = format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE id = ?1");
        let row = sqlx::query(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(map_topic_row).transpose()
    }

    async fn list_topics(&self, limit: u32) -> Result<Vec<Topic>, StorageError> {
        let sql = format!("SELECT {TOPIC_COLUMNS} FROM topics ORDER BY seq ASC LIMIT ?1");
        let rows = sqlx::query(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter().map(map_topic_row).collect()
    }

    async fn count_topics(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        u64::try_from(count).map_err(ser)
    }
}
