use std::path::Path;
use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::topic_service::TopicService;
use crate::tutorials::{JsonTutorialCatalog, StaticTutorialCatalog, TutorialContentProvider};

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    topic_service: Arc<TopicService>,
    tutorials: Arc<dyn TutorialContentProvider>,
}

impl AppServices {
    /// Wire services over an existing storage, using the given tutorial provider.
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, tutorials: Arc<dyn TutorialContentProvider>) -> Self {
        let topic_service = Arc::new(TopicService::new(clock, Arc::clone(&storage.topics)));
        Self {
            topic_service,
            tutorials,
        }
    }

    /// In-memory services with the built-in tutorial table. Useful for tests and demos.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(
            &Storage::in_memory(),
            clock,
            Arc::new(StaticTutorialCatalog::new()),
        )
    }

    /// Build services backed by `SQLite` storage, seeding starter topics into an empty database.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or seeding fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        tutorials: Arc<dyn TutorialContentProvider>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let services = Self::new(&storage, clock, tutorials);
        if services.topic_service.ensure_default_topics().await? {
            tracing::info!("seeded starter topics into empty database");
        }
        Ok(services)
    }

    /// Tutorial provider from a JSON catalog file, or the built-in table when no path is given.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the file cannot be read or parsed.
    pub fn load_tutorials(
        path: Option<&Path>,
    ) -> Result<Arc<dyn TutorialContentProvider>, AppServicesError> {
        let provider: Arc<dyn TutorialContentProvider> = match path {
            Some(path) => Arc::new(JsonTutorialCatalog::from_path(path)?),
            None => Arc::new(StaticTutorialCatalog::new()),
        };
        Ok(provider)
    }

    #[must_use]
    pub fn topic_service(&self) -> Arc<TopicService> {
        Arc::clone(&self.topic_service)
    }

    #[must_use]
    pub fn tutorials(&self) -> Arc<dyn TutorialContentProvider> {
        Arc::clone(&self.tutorials)
    }
}
