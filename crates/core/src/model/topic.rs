use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::model::difficulty::Difficulty;
use crate::model::ids::TopicId;
use crate::model::status::TopicStatus;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic id cannot be empty")]
    EmptyId,

    #[error("topic name cannot be empty")]
    EmptyName,

    #[error("problems solved ({solved}) exceeds total problems ({total})")]
    SolvedExceedsTotal { solved: u32, total: u32 },

    #[error("exam score must be between 0 and 100, got {0}")]
    InvalidExamScore(i64),

    #[error("problem count must be >= 0, got {0}")]
    NegativeProblemCount(i64),
}

//
// ─── PROBLEM TALLY ─────────────────────────────────────────────────────────────
//

/// Practice problems solved out of the topic's total. Always `solved <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProblemTally {
    solved: u32,
    total: u32,
}

impl ProblemTally {
    /// # Errors
    ///
    /// Returns `TopicError::SolvedExceedsTotal` if `solved > total`.
    pub fn new(solved: u32, total: u32) -> Result<Self, TopicError> {
        if solved > total {
            return Err(TopicError::SolvedExceedsTotal { solved, total });
        }
        Ok(Self { solved, total })
    }

    #[must_use]
    pub fn solved(&self) -> u32 {
        self.solved
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A unit of learning content with progress, difficulty and status tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    id: TopicId,
    name: String,
    description: String,
    difficulty_label: String,
    status: TopicStatus,
    progress: u8,
    problems: ProblemTally,
    estimated_time: String,
    exam_score: Option<u8>,
    last_activity_at: Option<DateTime<Utc>>,
}

impl Topic {
    /// Rehydrates a topic from stored fields.
    ///
    /// `progress` is taken as-is; clamping happens at the draft boundary.
    ///
    /// # Errors
    ///
    /// Returns `TopicError` if the id or name is empty or the exam score is above 100.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        id: TopicId,
        name: impl Into<String>,
        description: impl Into<String>,
        difficulty_label: impl Into<String>,
        status: TopicStatus,
        progress: u8,
        problems: ProblemTally,
        estimated_time: impl Into<String>,
        exam_score: Option<u8>,
        last_activity_at: Option<DateTime<Utc>>,
    ) -> Result<Self, TopicError> {
        if id.is_blank() {
            return Err(TopicError::EmptyId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TopicError::EmptyName);
        }
        if let Some(score) = exam_score {
            check_exam_score(i64::from(score))?;
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            description: description.into(),
            difficulty_label: difficulty_label.into().trim().to_owned(),
            status,
            progress,
            problems,
            estimated_time: estimated_time.into(),
            exam_score,
            last_activity_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    /// Display name; also the key for tutorial lookup.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parsed difficulty. `None` means unrated: the label is empty or not a known level.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_label(&self.difficulty_label)
    }

    /// Difficulty as authored, kept even when it is not a known level.
    #[must_use]
    pub fn difficulty_label(&self) -> &str {
        &self.difficulty_label
    }

    #[must_use]
    pub fn status(&self) -> TopicStatus {
        self.status
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn problems(&self) -> ProblemTally {
        self.problems
    }

    #[must_use]
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    #[must_use]
    pub fn exam_score(&self) -> Option<u8> {
        self.exam_score
    }

    #[must_use]
    pub fn last_activity_at(&self) -> Option<DateTime<Utc>> {
        self.last_activity_at
    }

    /// Begin learning. Only `NotStarted` moves (to `InProgress`); activity is stamped either way.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.status == TopicStatus::NotStarted {
            self.status = TopicStatus::InProgress;
        }
        self.last_activity_at = Some(now);
    }

    /// Store the latest exam score. Status is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::InvalidExamScore` if `score > 100`.
    pub fn record_exam_score(&mut self, score: u8, now: DateTime<Utc>) -> Result<(), TopicError> {
        check_exam_score(i64::from(score))?;
        self.exam_score = Some(score);
        self.last_activity_at = Some(now);
        Ok(())
    }
}

fn check_exam_score(score: i64) -> Result<u8, TopicError> {
    if !(0..=100).contains(&score) {
        return Err(TopicError::InvalidExamScore(score));
    }
    u8::try_from(score).map_err(|_| TopicError::InvalidExamScore(score))
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw topic as authored in JSON content files.
///
/// Labels are kept as strings so unknown values degrade instead of failing:
/// an unknown status becomes `not-started`, an unknown difficulty is kept as
/// text and treated as unrated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDraft {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub problems_solved: i64,
    #[serde(default)]
    pub total_problems: i64,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default)]
    pub exam_score: Option<i64>,
}

impl TopicDraft {
    /// Validate into a `Topic`, clamping progress into `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns `TopicError` for an empty id or name, negative problem counts,
    /// `problems_solved > total_problems`, or an exam score outside `0..=100`.
    pub fn validate(self) -> Result<Topic, TopicError> {
        let id: TopicId = self.id.parse().map_err(|_| TopicError::EmptyId)?;
        let problems = ProblemTally::new(
            problem_count(self.problems_solved)?,
            problem_count(self.total_problems)?,
        )?;
        let exam_score = self.exam_score.map(check_exam_score).transpose()?;
        let progress = u8::try_from(self.progress.clamp(0, 100)).unwrap_or(100);

        Topic::from_persisted(
            id,
            self.name,
            self.description,
            self.difficulty,
            TopicStatus::from_label_or_default(&self.status),
            progress,
            problems,
            self.estimated_time,
            exam_score,
            None,
        )
    }
}

fn problem_count(value: i64) -> Result<u32, TopicError> {
    u32::try_from(value).map_err(|_| TopicError::NegativeProblemCount(value))
}
