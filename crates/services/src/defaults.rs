//! Bundled starter topics, seeded into an empty repository.

use topics_core::model::TopicDraft;

const DEFAULT_TOPICS_JSON: &str = include_str!("../data/default_topics.json");

/// Parse a JSON array of topic drafts.
///
/// # Errors
///
/// Returns `serde_json::Error` if the input is not an array of drafts.
pub fn parse_topic_drafts(raw: &str) -> Result<Vec<TopicDraft>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// The bundled starter topics, one per built-in tutorial table entry.
///
/// # Errors
///
/// Returns `serde_json::Error` only if the bundled file is malformed.
pub fn default_topic_drafts() -> Result<Vec<TopicDraft>, serde_json::Error> {
    parse_topic_drafts(DEFAULT_TOPICS_JSON)
}
