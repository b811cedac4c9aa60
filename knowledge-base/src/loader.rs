//! JSON document → categories.
//!
//! `serde_json` is built with `preserve_order`, so object iteration follows
//! the document. Search ties are broken by that order.

use serde_json::{Map, Value};

use crate::errors::knowledge_base_error::KnowledgeBaseError;
use crate::structs::knowledge_entry::{Category, KnowledgeEntry};

pub(crate) fn parse_document(raw: &str) -> Result<Vec<Category>, KnowledgeBaseError> {
    let root: Map<String, Value> = match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => map,
        other => {
            return Err(KnowledgeBaseError::InvalidShape(format!(
                "expected an object of categories, found {}",
                kind_of(&other)
            )));
        }
    };

    root.into_iter()
        .map(|(name, topics)| parse_category(name, topics))
        .collect()
}

fn parse_category(name: String, topics: Value) -> Result<Category, KnowledgeBaseError> {
    let Value::Object(topics) = topics else {
        return Err(KnowledgeBaseError::InvalidShape(format!(
            "category `{name}` must be an object of topics, found {}",
            kind_of(&topics)
        )));
    };

    let topics = topics
        .into_iter()
        .map(|(key, entry)| {
            serde_json::from_value::<KnowledgeEntry>(entry).map(|e| (key, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Category { name, topics })
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
