use std::collections::HashMap;
use std::path::Path;

use topics_core::model::TutorialDescriptor;

use super::TutorialContentProvider;
use crate::error::TutorialCatalogError;

/// Tutorial table loaded from a JSON object of `topic name -> [descriptor]`.
///
/// ```json
/// { "Hash Tables": [ { "type": "video", "title": "Hash Functions", "duration": "12:30" } ] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonTutorialCatalog {
    entries: HashMap<String, Vec<TutorialDescriptor>>,
}

impl JsonTutorialCatalog {
    /// # Errors
    ///
    /// Returns `TutorialCatalogError::Parse` if the JSON does not match the expected shape.
    pub fn from_json_str(raw: &str) -> Result<Self, TutorialCatalogError> {
        let entries: HashMap<String, Vec<TutorialDescriptor>> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    /// # Errors
    ///
    /// Returns `TutorialCatalogError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, TutorialCatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), topics = catalog.len(), "loaded tutorial catalog");
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TutorialContentProvider for JsonTutorialCatalog {
    fn tutorials_for(&self, topic_name: &str) -> Vec<TutorialDescriptor> {
        self.entries.get(topic_name).cloned().unwrap_or_default()
    }
}
