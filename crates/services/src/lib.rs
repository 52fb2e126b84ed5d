#![forbid(unsafe_code)]

pub mod app_services;
pub mod defaults;
pub mod error;
pub mod topic_service;
pub mod tutorials;

pub use topics_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, TopicServiceError, TutorialCatalogError};
pub use topic_service::TopicService;
pub use tutorials::{JsonTutorialCatalog, StaticTutorialCatalog, TutorialContentProvider};
