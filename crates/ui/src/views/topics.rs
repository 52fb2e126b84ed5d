use dioxus::prelude::*;
use dioxus_router::use_navigator;
use topics_core::model::{Topic, TopicId};

use crate::components::TopicCard;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

const TOPIC_LIMIT: u32 = 200;

#[derive(Clone, Debug, PartialEq)]
struct TopicsData {
    topics: Vec<Topic>,
}

#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let topic_service = ctx.topic_service();
    let navigator = use_navigator();
    let mut action_error = use_signal(|| None::<ViewError>);

    let mut resource = {
        let topic_service = topic_service.clone();
        use_resource(move || {
            let topic_service = topic_service.clone();
            async move {
                let topics = topic_service
                    .list_topics(TOPIC_LIMIT)
                    .await
                    .map_err(|_| ViewError::Unknown)?;
                Ok::<_, ViewError>(TopicsData { topics })
            }
        })
    };

    let start_topic = use_callback(move |id: TopicId| {
        let topic_service = topic_service.clone();
        spawn(async move {
            match topic_service.start_topic(&id).await {
                Ok(_) => {
                    action_error.set(None);
                    resource.restart();
                }
                Err(err) => {
                    tracing::warn!(topic = %id, %err, "failed to start topic");
                    action_error.set(Some(ViewError::Unknown));
                }
            }
        });
    });

    let take_exam = use_callback(move |id: TopicId| {
        tracing::debug!(topic = %id, "opening exam");
        navigator.push(Route::Exam {
            topic_id: id.to_string(),
        });
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Learning path" }

            if let Some(err) = action_error() {
                p { class: "inline-error", "{err.message()}" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.topics.is_empty() {
                        p { "No topics yet. Run the seed command to add some." }
                    } else {
                        div { class: "topic-grid",
                            for topic in data.topics {
                                TopicCard {
                                    key: "{topic.id()}",
                                    topic: topic.clone(),
                                    on_start_topic: start_topic,
                                    on_take_exam: take_exam,
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
            }
        }
    }
}
