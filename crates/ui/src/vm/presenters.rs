//! Exhaustive display mappings for topic enums.
//!
//! Each concern (status icon/label, difficulty tone, tutorial icon, action
//! buttons) gets one `match` so a new enum variant fails to compile until
//! every mapping handles it.

use topics_core::model::{Difficulty, TopicStatus, TutorialKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    BookOpen,
    Play,
    CheckCircle,
    Award,
}

impl StatusIcon {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            StatusIcon::BookOpen => "icon icon-neutral",
            StatusIcon::Play => "icon icon-play",
            StatusIcon::CheckCircle => "icon icon-check",
            StatusIcon::Award => "icon icon-award",
        }
    }

    #[must_use]
    pub fn svg_path(self) -> &'static str {
        match self {
            StatusIcon::BookOpen => "M2 4h7a3 3 0 0 1 3 3v13a2 2 0 0 0-2-2H2zM22 4h-7a3 3 0 0 0-3 3v13a2 2 0 0 1 2-2h8z",
            StatusIcon::Play => "M6 4l14 8-14 8z",
            StatusIcon::CheckCircle => "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0zM8 12l3 3 5-6",
            StatusIcon::Award => "M12 15a6 6 0 1 0 0-12 6 6 0 0 0 0 12zM8.5 14L7 22l5-3 5 3-1.5-8",
        }
    }
}

/// Icon and label shown next to a topic's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusPresentation {
    pub icon: StatusIcon,
    pub label: &'static str,
}

#[must_use]
pub fn present_status(status: TopicStatus) -> StatusPresentation {
    let (icon, label) = match status {
        TopicStatus::NotStarted => (StatusIcon::BookOpen, "Not Started"),
        TopicStatus::InProgress => (StatusIcon::Play, "In Progress"),
        TopicStatus::Completed => (StatusIcon::CheckCircle, "Completed"),
        TopicStatus::Mastered => (StatusIcon::Award, "Mastered"),
    };
    StatusPresentation { icon, label }
}

/// Presents a raw status label; unknown labels present as not started.
#[must_use]
pub fn present_status_label(raw: &str) -> StatusPresentation {
    present_status(TopicStatus::from_label_or_default(raw))
}

/// Color family of the difficulty badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    MutedSuccess,
    MutedWarning,
    MutedDanger,
    Neutral,
}

impl BadgeTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeTone::MutedSuccess => "badge badge-success",
            BadgeTone::MutedWarning => "badge badge-warning",
            BadgeTone::MutedDanger => "badge badge-danger",
            BadgeTone::Neutral => "badge badge-neutral",
        }
    }
}

/// `None` (unrated) maps to neutral.
#[must_use]
pub fn difficulty_tone(difficulty: Option<Difficulty>) -> BadgeTone {
    match difficulty {
        Some(Difficulty::Beginner) => BadgeTone::MutedSuccess,
        Some(Difficulty::Intermediate) => BadgeTone::MutedWarning,
        Some(Difficulty::Advanced) => BadgeTone::MutedDanger,
        None => BadgeTone::Neutral,
    }
}

/// Badge text. Unknown labels are shown as authored; only an empty label reads "Unrated".
#[must_use]
pub fn difficulty_label(label: &str) -> &str {
    if label.trim().is_empty() { "Unrated" } else { label }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorialIcon {
    Video,
    FileText,
    Code,
}

impl TutorialIcon {
    #[must_use]
    pub fn for_kind(kind: TutorialKind) -> Self {
        match kind {
            TutorialKind::Video => TutorialIcon::Video,
            TutorialKind::Article => TutorialIcon::FileText,
            TutorialKind::Code => TutorialIcon::Code,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            TutorialIcon::Video => "icon icon-video",
            TutorialIcon::FileText => "icon icon-article",
            TutorialIcon::Code => "icon icon-code",
        }
    }

    #[must_use]
    pub fn svg_path(self) -> &'static str {
        match self {
            TutorialIcon::Video => "M3 6h13v12H3zM16 10l5-3v10l-5-3",
            TutorialIcon::FileText => "M6 2h8l4 4v16H6zM14 2v4h4M9 13h6M9 17h6",
            TutorialIcon::Code => "M8 6l-6 6 6 6M16 6l6 6-6 6",
        }
    }
}

/// Which buttons a card offers. The branches never overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardActions {
    /// "Start Learning".
    Start,
    /// "Continue" and "Take Exam".
    ContinueAndExam,
    /// Mastered topics get no buttons.
    None,
}

/// What a card control asks for when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIntent {
    ToggleTutorials,
    StartLearning,
    Continue,
    TakeExam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub class: &'static str,
    pub icon: Option<StatusIcon>,
    pub intent: CardIntent,
}

const START_BUTTONS: [ActionButton; 1] = [ActionButton {
    label: "Start Learning",
    class: "btn btn-primary",
    icon: Some(StatusIcon::Play),
    intent: CardIntent::StartLearning,
}];

const CONTINUE_BUTTONS: [ActionButton; 2] = [
    ActionButton {
        label: "Continue",
        class: "btn btn-primary",
        icon: None,
        intent: CardIntent::Continue,
    },
    ActionButton {
        label: "Take Exam",
        class: "btn btn-outline",
        icon: None,
        intent: CardIntent::TakeExam,
    },
];

impl CardActions {
    /// Buttons in display order.
    #[must_use]
    pub fn buttons(self) -> &'static [ActionButton] {
        match self {
            CardActions::Start => &START_BUTTONS,
            CardActions::ContinueAndExam => &CONTINUE_BUTTONS,
            CardActions::None => &[],
        }
    }
}

#[must_use]
pub fn card_actions(status: TopicStatus) -> CardActions {
    match status {
        TopicStatus::NotStarted => CardActions::Start,
        TopicStatus::InProgress | TopicStatus::Completed => CardActions::ContinueAndExam,
        TopicStatus::Mastered => CardActions::None,
    }
}
