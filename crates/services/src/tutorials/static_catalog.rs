use topics_core::model::{TutorialDescriptor, TutorialKind};

use super::TutorialContentProvider;

type Entry = (TutorialKind, &'static str, &'static str);

const TABLE: [(&str, [Entry; 3]); 6] = [
    (
        "Arrays & Strings",
        [
            (TutorialKind::Video, "Introduction to Arrays", "15:30"),
            (TutorialKind::Article, "String Manipulation Basics", "10 min read"),
            (TutorialKind::Code, "Two Pointers Technique", "20 min practice"),
        ],
    ),
    (
        "Linked Lists",
        [
            (TutorialKind::Video, "Singly Linked Lists", "20:15"),
            (TutorialKind::Article, "Doubly Linked Lists", "15 min read"),
            (TutorialKind::Code, "Cycle Detection", "25 min practice"),
        ],
    ),
    (
        "Binary Trees",
        [
            (TutorialKind::Video, "Tree Traversals", "18:45"),
            (TutorialKind::Article, "Binary Search Trees", "12 min read"),
            (TutorialKind::Code, "Tree Manipulation", "30 min practice"),
        ],
    ),
    (
        "Dynamic Programming",
        [
            (TutorialKind::Video, "Memoization vs Tabulation", "25:20"),
            (TutorialKind::Article, "DP Patterns", "20 min read"),
            (TutorialKind::Code, "State Transitions", "35 min practice"),
        ],
    ),
    (
        "Hash Tables",
        [
            (TutorialKind::Video, "Hash Functions", "12:30"),
            (TutorialKind::Article, "Collision Resolution", "8 min read"),
            (TutorialKind::Code, "Hash Table Implementation", "25 min practice"),
        ],
    ),
    (
        "Graph Algorithms",
        [
            (TutorialKind::Video, "Graph Representations", "22:15"),
            (TutorialKind::Article, "BFS and DFS", "15 min read"),
            (TutorialKind::Code, "Shortest Path Algorithms", "40 min practice"),
        ],
    ),
];

/// Built-in tutorial table for the six core data-structure topics.
///
/// Names match exactly (case and punctuation included).
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTutorialCatalog;

impl StaticTutorialCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Topic names the table knows, in table order.
    pub fn topic_names(&self) -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|(name, _)| *name)
    }
}

impl TutorialContentProvider for StaticTutorialCatalog {
    fn tutorials_for(&self, topic_name: &str) -> Vec<TutorialDescriptor> {
        TABLE
            .iter()
            .find(|(name, _)| *name == topic_name)
            .map(|(_, entries)| {
                entries
                    .iter()
                    .map(|(kind, title, duration)| TutorialDescriptor::new(*kind, *title, *duration))
                    .collect()
            })
            .unwrap_or_default()
    }
}
