use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a learner stands on a topic.
///
/// Wire labels are kebab-case (`"not-started"`, `"in-progress"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Mastered,
}

impl TopicStatus {
    pub const ALL: [TopicStatus; 4] = [
        TopicStatus::NotStarted,
        TopicStatus::InProgress,
        TopicStatus::Completed,
        TopicStatus::Mastered,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TopicStatus::NotStarted => "not-started",
            TopicStatus::InProgress => "in-progress",
            TopicStatus::Completed => "completed",
            TopicStatus::Mastered => "mastered",
        }
    }

    /// Strict parse of a wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }

    /// Parses a wire label, treating anything unrecognised as `NotStarted`.
    #[must_use]
    pub fn from_label_or_default(label: &str) -> Self {
        Self::from_label(label.trim()).unwrap_or_default()
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
