use serde::{Deserialize, Serialize};

/// Kind of tutorial content attached to a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorialKind {
    Video,
    Article,
    Code,
}

impl TutorialKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TutorialKind::Video => "video",
            TutorialKind::Article => "article",
            TutorialKind::Code => "code",
        }
    }
}

/// One tutorial item shown under an expanded topic card.
///
/// `duration` is display text and reads differently per kind: a timestamp
/// for video (`"15:30"`), a reading estimate for articles (`"10 min read"`),
/// a practice estimate for code (`"20 min practice"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialDescriptor {
    #[serde(rename = "type")]
    pub kind: TutorialKind,
    pub title: String,
    pub duration: String,
}

impl TutorialDescriptor {
    #[must_use]
    pub fn new(kind: TutorialKind, title: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            duration: duration.into(),
        }
    }

    #[must_use]
    pub fn video(title: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(TutorialKind::Video, title, timestamp)
    }

    #[must_use]
    pub fn article(title: impl Into<String>, reading_time: impl Into<String>) -> Self {
        Self::new(TutorialKind::Article, title, reading_time)
    }

    #[must_use]
    pub fn code(title: impl Into<String>, practice_time: impl Into<String>) -> Self {
        Self::new(TutorialKind::Code, title, practice_time)
    }
}
