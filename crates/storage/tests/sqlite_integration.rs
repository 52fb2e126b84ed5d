use topics_core::model::{Difficulty, Topic, TopicDraft, TopicId, TopicStatus};
use topics_core::time::fixed_now;
use storage::repository::{Storage, TopicRepository};
use storage::sqlite::SqliteRepository;

fn build_topic(id: &str, name: &str, difficulty: &str, status: &str) -> Topic {
    TopicDraft {
        id: id.into(),
        name: name.into(),
        description: format!("{name} fundamentals"),
        difficulty: difficulty.into(),
        status: status.into(),
        progress: 45,
        problems_solved: 4,
        total_problems: 12,
        estimated_time: "6 hours".into(),
        exam_score: Some(85),
    }
    .validate()
    .unwrap()
}

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrip_persists_every_field() {
    let repo = connect("memdb_topic_roundtrip").await;

    let mut topic = build_topic("dp", "Dynamic Programming", "Advanced", "not-started");
    topic.start(fixed_now());
    repo.upsert_topic(&topic).await.unwrap();

    let fetched = repo
        .get_topic(&TopicId::new("dp"))
        .await
        .expect("fetch")
        .expect("present");
    assert_eq!(fetched, topic);
    assert_eq!(fetched.status(), TopicStatus::InProgress);
    assert_eq!(fetched.difficulty(), Some(Difficulty::Advanced));
    assert_eq!(fetched.exam_score(), Some(85));
    assert_eq!(fetched.last_activity_at(), Some(fixed_now()));
}

#[tokio::test]
async fn sqlite_keeps_unknown_difficulty_label() {
    let repo = connect("memdb_topic_unrated").await;

    let topic = build_topic("misc", "Bit Tricks", "Expert", "bogus");
    repo.upsert_topic(&topic).await.unwrap();
    let blank = build_topic("blank", "Sorting", "", "not-started");
    repo.upsert_topic(&blank).await.unwrap();

    let fetched = repo.get_topic(topic.id()).await.unwrap().unwrap();
    assert_eq!(fetched.difficulty(), None);
    assert_eq!(fetched.difficulty_label(), "Expert");
    assert_eq!(fetched.status(), TopicStatus::NotStarted);

    let fetched = repo.get_topic(blank.id()).await.unwrap().unwrap();
    assert_eq!(fetched.difficulty_label(), "");
}

#[tokio::test]
async fn sqlite_lists_in_insertion_order_and_upserts_in_place() {
    let repo = connect("memdb_topic_order").await;

    let mut graphs = build_topic("graphs", "Graph Algorithms", "Advanced", "not-started");
    let arrays = build_topic("arrays", "Arrays & Strings", "Beginner", "completed");
    repo.upsert_topic(&graphs).await.unwrap();
    repo.upsert_topic(&arrays).await.unwrap();

    graphs.record_exam_score(40, fixed_now()).unwrap();
    repo.upsert_topic(&graphs).await.unwrap();

    let listed = repo.list_topics(10).await.unwrap();
    let ids: Vec<&str> = listed.iter().map(|t| t.id().as_str()).collect();
    assert_eq!(ids, vec!["graphs", "arrays"]);
    assert_eq!(listed[0].exam_score(), Some(40));
    assert_eq!(repo.count_topics().await.unwrap(), 2);
}

#[tokio::test]
async fn sqlite_missing_topic_is_none() {
    let repo = connect("memdb_topic_missing").await;
    assert!(repo.get_topic(&TopicId::new("nope")).await.unwrap().is_none());
}

#[tokio::test]
async fn storage_sqlite_migrates_twice_without_error() {
    let url = "sqlite:file:memdb_topic_storage?mode=memory&cache=shared";
    let storage = Storage::sqlite(url).await.expect("first open");
    storage
        .topics
        .upsert_topic(&build_topic("hash", "Hash Tables", "Intermediate", "mastered"))
        .await
        .unwrap();

    let reopened = Storage::sqlite(url).await.expect("second open");
    assert_eq!(reopened.topics.count_topics().await.unwrap(), 1);
}
