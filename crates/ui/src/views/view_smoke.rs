use std::sync::Arc;

use storage::repository::{StorageError, TopicRepository};
use topics_core::model::{Topic, TopicDraft, TopicId, TutorialDescriptor};

use super::test_harness::{
    ViewKind, render_topic_card, render_tutorial_list, setup_card_harness, setup_view_harness,
    setup_view_harness_with_repo,
};
use crate::vm::{CardIntent, map_tutorial_items};

fn topic(status: &str, exam_score: Option<i64>) -> Topic {
    named_topic("hash-tables", "Hash Tables", status, exam_score)
}

fn named_topic(id: &str, name: &str, status: &str, exam_score: Option<i64>) -> Topic {
    draft(id, name, status, exam_score).validate().unwrap()
}

fn draft(id: &str, name: &str, status: &str, exam_score: Option<i64>) -> TopicDraft {
    TopicDraft {
        id: id.into(),
        name: name.into(),
        description: "Hashing and collisions".into(),
        difficulty: "Intermediate".into(),
        status: status.into(),
        progress: 70,
        problems_solved: 7,
        total_problems: 10,
        estimated_time: "5 hours".into(),
        exam_score,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_renders_seeded_cards() {
    let mut harness = setup_view_harness(ViewKind::Topics).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Learning path"), "missing heading in {html}");
    assert!(html.contains("Linked Lists"), "missing card in {html}");
    assert!(html.contains("Dynamic Programming"), "missing card in {html}");
    assert!(html.contains("Start Learning"), "missing start action in {html}");
    assert!(html.contains("Take Exam"), "missing exam action in {html}");
    assert!(
        html.contains("View Tutorial Content"),
        "missing disclosure in {html}"
    );
}

#[test]
fn not_started_card_offers_start_only() {
    let html = render_topic_card(topic("not-started", None));
    assert!(html.contains("Start Learning"), "missing start in {html}");
    assert!(!html.contains("Take Exam"), "unexpected exam in {html}");
    assert!(!html.contains("Continue"), "unexpected continue in {html}");
}

#[test]
fn mastered_card_has_no_action_buttons() {
    let html = render_topic_card(topic("mastered", Some(95)));
    assert!(!html.contains("Start Learning"), "unexpected start in {html}");
    assert!(!html.contains("Take Exam"), "unexpected exam in {html}");
    assert!(!html.contains("completed-label"), "unexpected badge in {html}");
    assert!(html.contains("95%"), "missing score in {html}");
}

#[test]
fn completed_card_shows_actions_badge_and_score() {
    let html = render_topic_card(topic("completed", Some(85)));
    assert!(html.contains("Continue"), "missing continue in {html}");
    assert!(html.contains("Take Exam"), "missing exam in {html}");
    assert!(html.contains("completed-label"), "missing badge in {html}");
    assert!(html.contains("Last exam score"), "missing score row in {html}");
    assert!(html.contains("85%"), "missing score in {html}");
}

#[test]
fn zero_exam_score_hides_score_row() {
    let html = render_topic_card(topic("completed", Some(0)));
    assert!(!html.contains("Last exam score"), "unexpected score row in {html}");
}

#[test]
fn collapsed_card_renders_no_tutorials() {
    let html = render_topic_card(topic("in-progress", None));
    assert!(!html.contains("tutorial-list"), "unexpected tutorials in {html}");
    assert!(html.contains("7/10 problems"), "missing problems in {html}");
    assert!(html.contains("width: 70%"), "missing progress in {html}");
}

#[test]
fn unknown_difficulty_label_is_shown_with_neutral_badge() {
    let topic = TopicDraft {
        difficulty: "Expert".into(),
        ..draft("bits", "Bit Tricks", "not-started", None)
    }
    .validate()
    .unwrap();
    let html = render_topic_card(topic);
    assert!(html.contains("Expert"), "missing authored label in {html}");
    assert!(html.contains("badge-neutral"), "missing neutral tone in {html}");
    assert!(!html.contains("Unrated"), "unexpected fallback in {html}");
}

#[test]
fn start_learning_passes_topic_id_to_start_callback() {
    let topic = named_topic("dp", "Dynamic Programming", "not-started", None);
    let mut harness = setup_card_harness(topic.clone(), true);

    harness.press(CardIntent::StartLearning);

    assert_eq!(harness.started.ids(), vec![topic.id().clone()]);
    assert!(harness.examined.ids().is_empty());
}

#[test]
fn continue_and_take_exam_route_to_their_callbacks() {
    let topic = named_topic("graphs", "Graph Algorithms", "in-progress", None);
    let mut harness = setup_card_harness(topic.clone(), true);

    harness.press(CardIntent::Continue);
    assert_eq!(harness.started.ids(), vec![topic.id().clone()]);
    assert!(harness.examined.ids().is_empty());

    harness.press(CardIntent::TakeExam);
    assert_eq!(harness.examined.ids(), vec![topic.id().clone()]);
    assert_eq!(harness.started.ids().len(), 1);
}

#[test]
fn actions_without_callbacks_are_no_ops() {
    let topic = named_topic("graphs", "Graph Algorithms", "completed", None);
    let mut harness = setup_card_harness(topic, false);

    harness.press(CardIntent::StartLearning);
    harness.press(CardIntent::Continue);
    harness.press(CardIntent::TakeExam);

    assert!(harness.started.ids().is_empty());
    assert!(harness.examined.ids().is_empty());
    let html = harness.render();
    assert!(html.contains("Take Exam"), "card should still render: {html}");
}

#[test]
fn disclosure_toggle_shows_provider_tutorials_then_hides_them() {
    let topic = named_topic("binary-trees", "Binary Trees", "in-progress", None);
    let mut harness = setup_card_harness(topic, true);
    let html = harness.render();
    assert!(!html.contains("tutorial-list"), "unexpected tutorials in {html}");

    harness.press(CardIntent::ToggleTutorials);
    let html = harness.render();
    let first = html.find("Tree Traversals").expect("first tutorial");
    let last = html.find("Tree Manipulation").expect("last tutorial");
    assert!(first < last, "tutorials out of order in {html}");

    harness.press(CardIntent::ToggleTutorials);
    let html = harness.render();
    assert!(!html.contains("tutorial-list"), "tutorials still shown in {html}");
    assert!(harness.started.ids().is_empty());
}

#[test]
fn unknown_topic_expands_to_empty_list() {
    let topic = named_topic("quantum", "Quantum Computing", "not-started", None);
    let mut harness = setup_card_harness(topic, true);

    harness.press(CardIntent::ToggleTutorials);
    let html = harness.render();
    assert!(html.contains("tutorial-list"), "missing container in {html}");
    assert!(!html.contains("tutorial-item"), "unexpected rows in {html}");
}

#[test]
fn tutorial_list_renders_rows_in_order() {
    let items = map_tutorial_items(&[
        TutorialDescriptor::video("Hash Function Design", "15 min"),
        TutorialDescriptor::code("Build Your Own Hash Map", "40 min practice"),
    ]);
    let html = render_tutorial_list(items);
    let first = html.find("Hash Function Design").expect("first row");
    let second = html.find("Build Your Own Hash Map").expect("second row");
    assert!(first < second, "rows out of order in {html}");
    assert!(html.contains("40 min practice"), "missing duration in {html}");
    assert!(html.contains("icon-video"), "missing icon in {html}");
}

#[test]
fn empty_tutorial_list_renders_empty_container() {
    let html = render_tutorial_list(Vec::new());
    assert!(html.contains("tutorial-list"), "missing container in {html}");
    assert!(!html.contains("tutorial-item"), "unexpected rows in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_topic_name() {
    let mut harness = setup_view_harness(ViewKind::Exam("binary-trees".to_string())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Exam: Binary Trees"), "missing title in {html}");
    assert!(html.contains("Submit score"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_reports_missing_topic() {
    let mut harness = setup_view_harness(ViewKind::Exam("nope".to_string())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("does not exist"), "missing not found in {html}");
}

struct FailingTopicRepo;

#[async_trait::async_trait]
impl TopicRepository for FailingTopicRepo {
    async fn upsert_topic(&self, _topic: &Topic) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_topic(&self, _id: &TopicId) -> Result<Option<Topic>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_topics(&self, _limit: u32) -> Result<Vec<Topic>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn count_topics(&self) -> Result<u64, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_repo(ViewKind::Topics, Arc::new(FailingTopicRepo));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Retry"), "missing retry in {html}");
}
