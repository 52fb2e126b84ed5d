mod difficulty;
mod ids;
mod status;
mod topic;
mod tutorial;

pub use difficulty::Difficulty;
pub use ids::{ParseIdError, TopicId};
pub use status::TopicStatus;
pub use topic::{ProblemTally, Topic, TopicDraft, TopicError};
pub use tutorial::{TutorialDescriptor, TutorialKind};
