/// Backend that serves chat completions.
///
/// Both variants speak the same `chat/completions` JSON dialect and differ
/// only in how the URL is built and how the key is sent.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmProvider;
///
/// fn describe(provider: LlmProvider) -> &'static str {
///     match provider {
///         LlmProvider::AzureOpenAI => "deployment URL + api-key header",
///         LlmProvider::OpenAI => "/v1/chat/completions + bearer token",
///     }
/// }
/// assert!(describe(LlmProvider::AzureOpenAI).contains("api-key"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Azure OpenAI resource addressed by deployment name and API version.
    AzureOpenAI,
    /// OpenAI API or any server exposing the same `/v1` surface.
    OpenAI,
}
