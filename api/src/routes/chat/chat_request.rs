use serde::Deserialize;

/// Request payload for /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Button value or free-text question.
    pub message: String,
    /// Optional client-side context; accepted, not used for answering.
    #[serde(default)]
    pub context: Option<String>,
}
