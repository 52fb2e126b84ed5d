use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, StaticTutorialCatalog, TopicService, TutorialContentProvider};
use storage::repository::{InMemoryRepository, TopicRepository};
use topics_core::model::{Topic, TopicId};
use topics_core::time::fixed_now;

use crate::components::{TopicCard, TopicCardTestHandles, TutorialList};
use crate::context::{UiApp, build_app_context};
use crate::views::{ExamView, TopicsView};
use crate::vm::{CardIntent, TutorialItemVm};

#[derive(Clone)]
struct TestApp {
    topic_service: Arc<TopicService>,
    tutorials: Arc<dyn TutorialContentProvider>,
}

impl UiApp for TestApp {
    fn topic_service(&self) -> Arc<TopicService> {
        Arc::clone(&self.topic_service)
    }

    fn tutorials(&self) -> Arc<dyn TutorialContentProvider> {
        Arc::clone(&self.tutorials)
    }
}

fn test_app(repo: Arc<dyn TopicRepository>) -> Arc<TestApp> {
    Arc::new(TestApp {
        topic_service: Arc::new(TopicService::new(Clock::fixed(fixed_now()), repo)),
        tutorials: Arc::new(StaticTutorialCatalog::new()),
    })
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Topics,
    Exam(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Topics => rsx! { TopicsView {} },
        ViewKind::Exam(topic_id) => rsx! { ExamView { topic_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub topic_service: Arc<TopicService>,
}

impl ViewHarness {
    /// Build the tree and let resource futures settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// View harness over an in-memory repository seeded with the starter topics.
pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let repo = Arc::new(InMemoryRepository::new());
    let harness = setup_view_harness_with_repo(view, repo);
    harness
        .topic_service
        .ensure_default_topics()
        .await
        .expect("seed topics");
    harness
}

pub fn setup_view_harness_with_repo(view: ViewKind, repo: Arc<dyn TopicRepository>) -> ViewHarness {
    let app = test_app(repo);
    let topic_service = Arc::clone(&app.topic_service);
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, topic_service }
}

#[derive(Props, Clone)]
struct StaticCardProps {
    app: Arc<TestApp>,
    topic: Topic,
}

impl PartialEq for StaticCardProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn StaticCardHarness(props: StaticCardProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { TopicCard { topic: props.topic.clone() } }
}

/// Render a single card with no action handlers attached.
pub fn render_topic_card(topic: Topic) -> String {
    let app = test_app(Arc::new(InMemoryRepository::new()));
    let mut dom = VirtualDom::new_with_props(StaticCardHarness, StaticCardProps { app, topic });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

/// Ids received by the card's callbacks, in call order.
#[derive(Clone, Default)]
pub struct CapturedIds(Rc<RefCell<Vec<TopicId>>>);

impl CapturedIds {
    fn push(&self, id: TopicId) {
        self.0.borrow_mut().push(id);
    }

    pub fn ids(&self) -> Vec<TopicId> {
        self.0.borrow().clone()
    }
}

#[derive(Props, Clone)]
struct InteractiveCardProps {
    app: Arc<TestApp>,
    topic: Topic,
    handles: TopicCardTestHandles,
    started: CapturedIds,
    examined: CapturedIds,
    with_callbacks: bool,
}

impl PartialEq for InteractiveCardProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn InteractiveCardHarness(props: InteractiveCardProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());

    let started = props.started.clone();
    let on_start = use_callback(move |id: TopicId| started.push(id));
    let examined = props.examined.clone();
    let on_exam = use_callback(move |id: TopicId| examined.push(id));

    if props.with_callbacks {
        rsx! {
            TopicCard {
                topic: props.topic.clone(),
                on_start_topic: on_start,
                on_take_exam: on_exam,
            }
        }
    } else {
        rsx! { TopicCard { topic: props.topic.clone() } }
    }
}

/// A mounted card whose controls can be pressed from a test.
pub struct CardHarness {
    pub dom: VirtualDom,
    pub started: CapturedIds,
    pub examined: CapturedIds,
    handles: TopicCardTestHandles,
}

impl CardHarness {
    pub fn press(&mut self, intent: CardIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Mount a card, optionally wiring both action callbacks to capture ids.
pub fn setup_card_harness(topic: Topic, with_callbacks: bool) -> CardHarness {
    let app = test_app(Arc::new(InMemoryRepository::new()));
    let handles = TopicCardTestHandles::default();
    let started = CapturedIds::default();
    let examined = CapturedIds::default();
    let mut dom = VirtualDom::new_with_props(
        InteractiveCardHarness,
        InteractiveCardProps {
            app,
            topic,
            handles: handles.clone(),
            started: started.clone(),
            examined: examined.clone(),
            with_callbacks,
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    CardHarness {
        dom,
        started,
        examined,
        handles,
    }
}

#[derive(Props, Clone, PartialEq)]
struct TutorialHarnessProps {
    items: Vec<TutorialItemVm>,
}

#[component]
fn TutorialHarness(props: TutorialHarnessProps) -> Element {
    rsx! { TutorialList { items: props.items.clone() } }
}

pub fn render_tutorial_list(items: Vec<TutorialItemVm>) -> String {
    let mut dom = VirtualDom::new_with_props(TutorialHarness, TutorialHarnessProps { items });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}
