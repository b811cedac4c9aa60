//! Where the knowledge base document lives.

use std::path::PathBuf;

/// Default document location, relative to the working directory.
pub const DEFAULT_KNOWLEDGE_BASE_PATH: &str = "data/mock_data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBaseConfig {
    /// Path to the JSON document.
    pub path: PathBuf,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_KNOWLEDGE_BASE_PATH),
        }
    }
}

impl KnowledgeBaseConfig {
    /// Reads `KNOWLEDGE_BASE_PATH`, falling back to [`DEFAULT_KNOWLEDGE_BASE_PATH`].
    pub fn from_env() -> Self {
        match std::env::var("KNOWLEDGE_BASE_PATH") {
            Ok(p) if !p.trim().is_empty() => Self {
                path: PathBuf::from(p.trim()),
            },
            _ => Self::default(),
        }
    }
}
