use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use topics_core::model::{Topic, TopicId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Parse the score field. Accepts whole numbers from 0 to 100.
fn parse_exam_score(raw: &str) -> Result<u8, &'static str> {
    let value: u8 = raw
        .trim()
        .parse()
        .map_err(|_| "Enter a whole number between 0 and 100.")?;
    if value > 100 {
        return Err("Enter a whole number between 0 and 100.");
    }
    Ok(value)
}

#[component]
pub fn ExamView(topic_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let topic_service = ctx.topic_service();
    let navigator = use_navigator();
    let id = TopicId::new(topic_id);
    let mut score_input = use_signal(String::new);
    let mut form_error = use_signal(|| None::<&'static str>);
    let mut saving = use_signal(|| false);

    let resource = {
        let topic_service = topic_service.clone();
        let id = id.clone();
        use_resource(move || {
            let topic_service = topic_service.clone();
            let id = id.clone();
            async move {
                let topic: Topic = topic_service
                    .get_topic(&id)
                    .await
                    .map_err(|_| ViewError::Unknown)?
                    .ok_or(ViewError::NotFound)?;
                Ok::<_, ViewError>(topic)
            }
        })
    };

    let submit = use_callback(move |()| {
        let score = match parse_exam_score(&score_input()) {
            Ok(score) => score,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        let topic_service = topic_service.clone();
        let id = id.clone();
        saving.set(true);
        spawn(async move {
            match topic_service.record_exam_score(&id, score).await {
                Ok(_) => {
                    form_error.set(None);
                    navigator.push(Route::Topics {});
                }
                Err(err) => {
                    tracing::warn!(topic = %id, %err, "failed to record exam score");
                    form_error.set(Some("Could not save the score. Please try again."));
                }
            }
            saving.set(false);
        });
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(topic) => rsx! {
                    h2 { "Exam: {topic.name()}" }
                    if let Some(score) = topic.exam_score() {
                        p { class: "muted", "Previous score: {score}%" }
                    }
                    form {
                        class: "exam-form",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            submit.call(());
                        },
                        label { r#for: "exam-score", "Score (0-100)" }
                        input {
                            id: "exam-score",
                            r#type: "number",
                            min: "0",
                            max: "100",
                            value: "{score_input}",
                            oninput: move |evt| score_input.set(evt.value()),
                        }
                        if let Some(message) = form_error() {
                            p { class: "inline-error", "{message}" }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            "Submit score"
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
            Link { class: "back-link", to: Route::Topics {}, "Back to topics" }
        }
    }
}
