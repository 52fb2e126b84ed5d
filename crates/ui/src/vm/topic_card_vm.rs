use services::TutorialContentProvider;
use topics_core::model::{Topic, TopicId, TopicStatus, TutorialDescriptor};

use crate::vm::presenters::{
    BadgeTone, CardActions, StatusPresentation, TutorialIcon, card_actions, difficulty_label,
    difficulty_tone, present_status,
};
use crate::vm::time_fmt::format_last_activity;

/// Whether a card's tutorial list is open. Starts collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == Disclosure::Expanded
    }
}

/// UI-ready tutorial row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialItemVm {
    pub icon: TutorialIcon,
    pub title: String,
    pub duration: String,
}

impl From<&TutorialDescriptor> for TutorialItemVm {
    fn from(tutorial: &TutorialDescriptor) -> Self {
        Self {
            icon: TutorialIcon::for_kind(tutorial.kind),
            title: tutorial.title.clone(),
            duration: tutorial.duration.clone(),
        }
    }
}

#[must_use]
pub fn map_tutorial_items(tutorials: &[TutorialDescriptor]) -> Vec<TutorialItemVm> {
    tutorials.iter().map(TutorialItemVm::from).collect()
}

/// Everything the topic card renders, computed from one topic and the disclosure state.
#[derive(Clone, Debug, PartialEq)]
pub struct TopicCardVm {
    pub id: TopicId,
    pub name: String,
    pub description: String,
    pub status: StatusPresentation,
    pub difficulty_label: String,
    pub difficulty_tone: BadgeTone,
    pub progress_percent: u8,
    pub problems_label: String,
    pub estimated_time: String,
    pub exam_score_label: Option<String>,
    pub last_activity: Option<String>,
    pub actions: CardActions,
    pub show_completed_badge: bool,
    pub disclosure: Disclosure,
    /// Empty while collapsed, and for topics the provider does not know.
    pub tutorials: Vec<TutorialItemVm>,
}

impl TopicCardVm {
    #[must_use]
    pub fn build(
        topic: &Topic,
        disclosure: Disclosure,
        provider: &dyn TutorialContentProvider,
    ) -> Self {
        let tutorials = if disclosure.is_expanded() {
            map_tutorial_items(&provider.tutorials_for(topic.name()))
        } else {
            Vec::new()
        };
        let problems = topic.problems();

        Self {
            id: topic.id().clone(),
            name: topic.name().to_owned(),
            description: topic.description().to_owned(),
            status: present_status(topic.status()),
            difficulty_label: difficulty_label(topic.difficulty_label()).to_owned(),
            difficulty_tone: difficulty_tone(topic.difficulty()),
            progress_percent: topic.progress(),
            problems_label: format!("{}/{} problems", problems.solved(), problems.total()),
            estimated_time: topic.estimated_time().to_owned(),
            // A zero score reads as "no exam taken".
            exam_score_label: topic
                .exam_score()
                .filter(|score| *score > 0)
                .map(|score| format!("{score}%")),
            last_activity: format_last_activity(topic.last_activity_at()),
            actions: card_actions(topic.status()),
            show_completed_badge: topic.status() == TopicStatus::Completed,
            disclosure,
            tutorials,
        }
    }

    /// Progress bar width as a fraction of the track. Not clamped.
    #[must_use]
    pub fn width_factor(&self) -> f32 {
        f32::from(self.progress_percent) / 100.0
    }

    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {}%", self.progress_percent)
    }
}
