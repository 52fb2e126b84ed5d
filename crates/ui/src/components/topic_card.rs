#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use topics_core::model::{Topic, TopicId};

use super::Glyph;
use crate::context::AppContext;
use crate::vm::{CardIntent, Disclosure, TopicCardVm, TutorialItemVm};

const CHEVRON_UP: &str = "M18 15l-6-6-6 6";
const CHEVRON_DOWN: &str = "M6 9l6 6 6-6";
const LIGHTBULB: &str = "M9 18h6M10 22h4M12 2a7 7 0 0 0-4 12.7V16h8v-1.3A7 7 0 0 0 12 2z";
const TARGET: &str = "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0zM18 12a6 6 0 1 1-12 0 6 6 0 0 1 12 0zM14 12a2 2 0 1 1-4 0 2 2 0 0 1 4 0z";
const CLOCK: &str = "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0zM12 6v6l4 2";
const TRENDING_UP: &str = "M23 6l-9.5 9.5-5-5L1 18M17 6h6v6";

fn notify(handler: Option<EventHandler<TopicId>>, id: &TopicId) {
    if let Some(handler) = handler {
        handler.call(id.clone());
    }
}

/// Progress card for one topic.
///
/// Tutorials come from the `TutorialContentProvider` in `AppContext`. Missing
/// callbacks turn the matching buttons into no-ops.
#[component]
pub fn TopicCard(
    topic: Topic,
    on_start_topic: Option<EventHandler<TopicId>>,
    on_take_exam: Option<EventHandler<TopicId>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let tutorials = ctx.tutorials();
    let mut disclosure = use_signal(Disclosure::default);
    let id = topic.id().clone();

    let dispatch = use_callback(move |intent: CardIntent| match intent {
        CardIntent::ToggleTutorials => disclosure.set(disclosure().toggled()),
        CardIntent::StartLearning | CardIntent::Continue => notify(on_start_topic, &id),
        CardIntent::TakeExam => notify(on_take_exam, &id),
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TopicCardTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm = TopicCardVm::build(&topic, disclosure(), tutorials.as_ref());
    let name = vm.name.clone();
    let description = vm.description.clone();
    let status_label = vm.status.label;
    let status_icon = vm.status.icon;
    let difficulty_class = vm.difficulty_tone.css_class();
    let difficulty_label = vm.difficulty_label.clone();
    let progress_percent = vm.progress_percent;
    let progress_style = vm.progress_style();
    let problems_label = vm.problems_label.clone();
    let estimated_time = vm.estimated_time.clone();
    let chevron = if vm.disclosure.is_expanded() { CHEVRON_UP } else { CHEVRON_DOWN };
    let buttons = vm.actions.buttons();

    rsx! {
        article { class: "topic-card", "data-topic-id": "{vm.id}",
            header { class: "topic-card-header",
                div { class: "topic-card-title",
                    Glyph { class: status_icon.css_class(), path: status_icon.svg_path() }
                    h3 { "{name}" }
                }
                span { class: difficulty_class, "{difficulty_label}" }
            }

            p { class: "topic-card-description", "{description}" }

            div { class: "topic-card-metrics",
                div { class: "metric-row",
                    span { class: "metric-label", "Progress" }
                    span { class: "metric-value", "{progress_percent}%" }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "{progress_style}" }
                }
                div { class: "metric-row metric-row--muted",
                    span { class: "metric-inline",
                        Glyph { class: "icon icon-small", path: TARGET }
                        span { "{problems_label}" }
                    }
                    span { class: "metric-inline",
                        Glyph { class: "icon icon-small", path: CLOCK }
                        span { "{estimated_time}" }
                    }
                }
                if let Some(score) = vm.exam_score_label.clone() {
                    div { class: "metric-row exam-score",
                        span { class: "metric-label", "Last exam score" }
                        span { class: "metric-inline metric-good",
                            Glyph { class: "icon icon-small", path: TRENDING_UP }
                            span { class: "metric-value", "{score}" }
                        }
                    }
                }
                if let Some(at) = vm.last_activity.clone() {
                    div { class: "metric-row metric-row--muted",
                        span { class: "metric-label", "Last activity" }
                        span { "{at}" }
                    }
                }
            }

            button {
                class: "topic-card-disclosure",
                r#type: "button",
                onclick: move |_| dispatch.call(CardIntent::ToggleTutorials),
                span { class: "metric-inline",
                    Glyph { class: "icon icon-small", path: LIGHTBULB }
                    span { "View Tutorial Content" }
                }
                Glyph { class: "icon icon-small", path: chevron }
            }

            if vm.disclosure.is_expanded() {
                TutorialList { items: vm.tutorials.clone() }
            }

            div { class: "topic-card-actions",
                for action in buttons {
                    button {
                        key: "{action.label}",
                        class: action.class,
                        r#type: "button",
                        onclick: move |_| dispatch.call(action.intent),
                        if let Some(icon) = action.icon {
                            Glyph { class: icon.css_class(), path: icon.svg_path() }
                        }
                        span { "{action.label}" }
                    }
                }
            }

            if vm.show_completed_badge {
                div { class: "topic-card-badge",
                    span { class: "completed-label", "{status_label}" }
                }
            }
        }
    }
}

/// Tutorial rows under an expanded card. An empty list renders an empty container.
#[component]
pub fn TutorialList(items: Vec<TutorialItemVm>) -> Element {
    rsx! {
        ul { class: "tutorial-list",
            for (index, item) in items.into_iter().enumerate() {
                li { key: "{index}", class: "tutorial-item",
                    span { class: "metric-inline",
                        Glyph { class: item.icon.css_class(), path: item.icon.svg_path() }
                        span { class: "tutorial-title", "{item.title}" }
                    }
                    span { class: "tutorial-duration", "{item.duration}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TopicCardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<CardIntent>>>>,
}

#[cfg(test)]
impl TopicCardTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<CardIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<CardIntent> {
        (*self.dispatch.borrow()).expect("card dispatch registered")
    }
}
