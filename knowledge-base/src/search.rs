//! Keyword context search over the knowledge base.
//!
//! Matching is plain substring containment on the lower-cased query, with no
//! tokenizing and no scoring. A `category_topic` query (the encoding used by
//! menu buttons) that resolves directly wins over everything else.

use tracing::debug;

use crate::KnowledgeBase;
use crate::structs::knowledge_entry::KnowledgeEntry;

/// Returned when nothing in the knowledge base matches the query.
pub const NO_CONTEXT_FOUND: &str = "No specific internal data found.";

/// Upper bound on snippets per context string.
pub const MAX_CONTEXT_SNIPPETS: usize = 3;

/// Builds the context string for `query`.
///
/// 1. `category_topic` queries that resolve exactly return that single snippet.
/// 2. Otherwise an entry matches when its topic key or category name occurs in
///    the query, or the query occurs in its (lower-cased) content.
/// 3. The first [`MAX_CONTEXT_SNIPPETS`] matches in document order are joined
///    with newlines; no match yields [`NO_CONTEXT_FOUND`].
///
/// Never fails and never returns an empty string.
///
/// # Example
/// ```
/// use knowledge_base::{KnowledgeBase, find_context};
///
/// let kb = KnowledgeBase::from_json_str(
///     r#"{"fees": {"tuition_in_state": {"content": "In-state tuition is $10,000/year.", "url": "https://example.edu/tuition"}}}"#,
/// ).unwrap();
/// assert_eq!(
///     find_context(&kb, "fees_tuition_in_state"),
///     "[FEES - Tuition_in_state]: In-state tuition is $10,000/year. (Source: https://example.edu/tuition)"
/// );
/// ```
pub fn find_context(kb: &KnowledgeBase, query: &str) -> String {
    let query = query.to_lowercase();

    if let Some((category, topic)) = query.split_once('_') {
        if let Some(entry) = kb.get(category, topic) {
            debug!(category, topic, "context: direct key match");
            return format_snippet(category, topic, entry);
        }
    }

    let matches: Vec<String> = kb
        .iter()
        .filter(|(category, topic, entry)| {
            query.contains(topic)
                || query.contains(category)
                || entry.content.to_lowercase().contains(&query)
        })
        .take(MAX_CONTEXT_SNIPPETS)
        .map(|(category, topic, entry)| format_snippet(category, topic, entry))
        .collect();

    debug!(hits = matches.len(), "context: substring search");

    if matches.is_empty() {
        NO_CONTEXT_FOUND.to_string()
    } else {
        matches.join("\n")
    }
}

/// `[CATEGORY - Topic]: content (Source: url)`
pub fn format_snippet(category: &str, topic: &str, entry: &KnowledgeEntry) -> String {
    format!(
        "[{} - {}]: {} (Source: {})",
        category.to_uppercase(),
        capitalize(topic),
        entry.content,
        entry.url
    )
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
