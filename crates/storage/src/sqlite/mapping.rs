use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use topics_core::model::{ProblemTally, Topic, TopicId, TopicStatus};

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn i64_to_u32(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

fn i64_to_u8(field: &'static str, v: i64) -> Result<u8, StorageError> {
    u8::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn parse_status(s: &str) -> Result<TopicStatus, StorageError> {
    TopicStatus::from_label(s)
        .ok_or_else(|| StorageError::Serialization(format!("invalid status: {s}")))
}

/// Difficulty labels are free text; an empty label is stored as NULL.
pub(crate) fn difficulty_column(label: &str) -> Option<&str> {
    (!label.is_empty()).then_some(label)
}

pub(crate) fn map_topic_row(row: &SqliteRow) -> Result<Topic, StorageError> {
    let status_str: String = row.try_get("status").map_err(ser)?;
    let difficulty_str: Option<String> = row.try_get("difficulty").map_err(ser)?;

    let problems = ProblemTally::new(
        i64_to_u32("problems_solved", row.try_get("problems_solved").map_err(ser)?)?,
        i64_to_u32("total_problems", row.try_get("total_problems").map_err(ser)?)?,
    )
    .map_err(ser)?;

    let exam_score = row
        .try_get::<Option<i64>, _>("exam_score")
        .map_err(ser)?
        .map(|v| i64_to_u8("exam_score", v))
        .transpose()?;

    Topic::from_persisted(
        TopicId::new(row.try_get::<String, _>("id").map_err(ser)?),
        row.try_get::<String, _>("name").map_err(ser)?,
        row.try_get::<String, _>("description").map_err(ser)?,
        difficulty_str.unwrap_or_default(),
        parse_status(&status_str)?,
        i64_to_u8("progress", row.try_get("progress").map_err(ser)?)?,
        problems,
        row.try_get::<String, _>("estimated_time").map_err(ser)?,
        exam_score,
        row.try_get("last_activity_at").map_err(ser)?,
    )
    .map_err(ser)
}
