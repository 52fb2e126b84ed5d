//! Tutorial content lookup, keyed by topic display name.

mod json_catalog;
mod static_catalog;

use topics_core::model::TutorialDescriptor;

pub use json_catalog::JsonTutorialCatalog;
pub use static_catalog::StaticTutorialCatalog;

/// Source of tutorial items for a topic.
///
/// Lookup is total: a name the provider does not know yields an empty list,
/// never an error.
pub trait TutorialContentProvider: Send + Sync {
    fn tutorials_for(&self, topic_name: &str) -> Vec<TutorialDescriptor>;
}
