mod presenters;
mod time_fmt;
mod topic_card_vm;

pub use presenters::{
    ActionButton, BadgeTone, CardActions, CardIntent, StatusIcon, StatusPresentation,
    TutorialIcon, card_actions, difficulty_label, difficulty_tone, present_status,
    present_status_label,
};
pub use time_fmt::format_last_activity;
pub use topic_card_vm::{Disclosure, TopicCardVm, TutorialItemVm, map_tutorial_items};
