//! Static category → topic knowledge base with keyword lookup.
//!
//! Public API:
//! - [`KnowledgeBase::load_or_empty`]: read the JSON document once at startup.
//! - [`search::find_context`]: substring search that builds the context string
//!   handed to the language model.

pub mod errors;
mod loader;
pub mod search;
pub mod structs;

use std::path::Path;

use tracing::{info, warn};

pub use errors::knowledge_base_error::KnowledgeBaseError;
pub use search::{NO_CONTEXT_FOUND, find_context};
pub use structs::knowledge_base_config::KnowledgeBaseConfig;
pub use structs::knowledge_entry::{Category, KnowledgeEntry};

/// Immutable two-level store. Categories and topics keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    categories: Vec<Category>,
}

impl KnowledgeBase {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parses a JSON document of the form `{category: {topic: {content, url}}}`.
    pub fn from_json_str(raw: &str) -> Result<Self, KnowledgeBaseError> {
        loader::parse_document(raw).map(Self::new)
    }

    /// Reads and parses the document at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json_str(&raw)
    }

    /// Loads the document, or returns an empty knowledge base with a warning.
    ///
    /// The assistant keeps working without data: every lookup simply finds nothing.
    pub async fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path).await {
            Ok(kb) => {
                info!(
                    path = %path.display(),
                    categories = kb.categories.len(),
                    topics = kb.topic_count(),
                    "knowledge base loaded"
                );
                kb
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "knowledge base not loaded, continuing with an empty one"
                );
                Self::default()
            }
        }
    }

    /// Direct lookup by exact category name and topic key.
    pub fn get(&self, category: &str, topic: &str) -> Option<&KnowledgeEntry> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .and_then(|c| c.topic(topic))
    }

    /// `(category, topic, entry)` triples in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &KnowledgeEntry)> {
        self.categories.iter().flat_map(|c| {
            c.topics
                .iter()
                .map(move |(key, entry)| (c.name.as_str(), key.as_str(), entry))
        })
    }

    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|c| c.topics.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.topic_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const DOC: &str = r#"{
        "fees": {
            "tuition_in_state": {"content": "In-state tuition is $10,000/year.", "url": "https://example.edu/tuition"},
            "scholarships": {"content": "Merit scholarships are available.", "url": "https://example.edu/aid"}
        },
        "admissions": {
            "undergraduate": {"content": "Apply online by March 1.", "url": "https://example.edu/apply"}
        }
    }"#;

    #[tokio::test]
    async fn loads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();

        let kb = KnowledgeBase::load(file.path()).await.unwrap();
        assert_eq!(kb.topic_count(), 3);
        assert_eq!(
            kb.get("fees", "scholarships").map(|e| e.url.as_str()),
            Some("https://example.edu/aid")
        );
    }

    #[tokio::test]
    async fn missing_file_yields_empty_base() {
        let dir = tempfile::tempdir().unwrap();
        let kb = KnowledgeBase::load_or_empty(dir.path().join("absent.json")).await;
        assert!(kb.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_yields_empty_base() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(matches!(
            KnowledgeBase::load(file.path()).await,
            Err(KnowledgeBaseError::Json(_))
        ));
        assert!(KnowledgeBase::load_or_empty(file.path()).await.is_empty());
    }

    #[test]
    fn iteration_follows_document_order() {
        let kb = KnowledgeBase::from_json_str(DOC).unwrap();
        let order: Vec<_> = kb.iter().map(|(c, t, _)| format!("{c}/{t}")).collect();
        assert_eq!(
            order,
            ["fees/tuition_in_state", "fees/scholarships", "admissions/undergraduate"]
        );
    }
}
