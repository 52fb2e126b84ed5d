use std::sync::Arc;

use services::{TopicService, TutorialContentProvider};

pub trait UiApp: Send + Sync {
    fn topic_service(&self) -> Arc<TopicService>;
    fn tutorials(&self) -> Arc<dyn TutorialContentProvider>;
}

#[derive(Clone)]
pub struct AppContext {
    topic_service: Arc<TopicService>,
    tutorials: Arc<dyn TutorialContentProvider>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            topic_service: app.topic_service(),
            tutorials: app.tutorials(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
