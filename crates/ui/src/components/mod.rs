mod glyph;
mod topic_card;

pub use glyph::Glyph;
pub use topic_card::{TopicCard, TutorialList};

#[cfg(test)]
pub(crate) use topic_card::TopicCardTestHandles;
