use serde::{Deserialize, Serialize};

/// One topic of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Answer text shown to the model.
    pub content: String,
    /// Page the answer comes from; cited in replies.
    pub url: String,
}

/// A category and its topics, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub topics: Vec<(String, KnowledgeEntry)>,
}

impl Category {
    pub fn topic(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.topics.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }
}
