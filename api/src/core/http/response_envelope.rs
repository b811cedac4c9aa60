use serde::Serialize;

/// Error envelope returned for requests the server could not parse.
///
/// Successful chat replies are sent bare (`{text, buttons}`), which is what
/// the widget expects, so the envelope only ever carries an error.
#[derive(Serialize)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize)]
pub struct ApiError {
    /// Stable, machine-readable error code (e.g. "BAD_REQUEST").
    pub code: &'static str,
    /// Human-friendly error message.
    pub message: String,
    /// Optional fine-grained error details (per-field, hints, etc.).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ApiErrorDetail>,
}

#[derive(Serialize)]
pub struct ApiErrorDetail {
    /// Field path like `message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Optional hint to help the client fix the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: &'static str, message: impl Into<String>, details: Vec<ApiErrorDetail>) -> Self {
        Self {
            success: false,
            error: ApiError {
                code,
                message: message.into(),
                details,
            },
        }
    }
}
