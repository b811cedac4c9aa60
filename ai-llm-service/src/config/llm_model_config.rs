use crate::config::llm_provider::LlmProvider;

/// Configuration for a chat model invocation.
///
/// # Fields
///
/// - `provider`: Which backend to talk to.
/// - `model`: Model identifier; for Azure this is the deployment name.
/// - `endpoint`: Base URL of the resource (no trailing path).
/// - `api_key`: Key sent with every request.
/// - `api_version`: Azure `api-version` query parameter (ignored for OpenAI).
/// - `max_tokens`: Upper bound for the generated answer.
/// - `temperature`: Sampling temperature, provider default when `None`.
/// - `timeout_secs`: Request timeout; transport default when `None`.
///
/// # Examples
///
/// ```
/// use ai_llm_service::{LlmModelConfig, LlmProvider};
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::AzureOpenAI,
///     model: "gpt-35-turbo".to_string(),
///     endpoint: "https://my-resource.openai.azure.com".to_string(),
///     api_key: Some("secret".to_string()),
///     api_version: Some("2023-05-15".to_string()),
///     max_tokens: Some(300),
///     temperature: None,
///     timeout_secs: None,
/// };
/// assert_eq!(cfg.max_tokens, Some(300));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The backend serving the model.
    pub provider: LlmProvider,

    /// Model identifier or Azure deployment name.
    pub model: String,

    /// Base URL of the inference endpoint.
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: Option<String>,

    /// Azure API version.
    pub api_version: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
