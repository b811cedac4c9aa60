//! Model config loaded from environment variables.
//!
//! Only Azure OpenAI is wired to the environment today:
//!
//! - `AZURE_OPENAI_API_KEY`         = API key (required to enable the client)
//! - `AZURE_OPENAI_ENDPOINT`        = resource URL (required to enable the client)
//! - `AZURE_OPENAI_DEPLOYMENT_NAME` = deployment, default [`DEFAULT_AZURE_DEPLOYMENT`]
//! - `AZURE_OPENAI_API_VERSION`     = API version, default [`DEFAULT_AZURE_API_VERSION`]
//! - `AZURE_OPENAI_TIMEOUT_SECS`    = optional request timeout
//!
//! A missing key or endpoint is not an error: the loader returns `Ok(None)`
//! and the caller decides how to run without a model.

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{Result, non_empty, parse_opt_u64, validate_http_endpoint},
};

pub const DEFAULT_AZURE_DEPLOYMENT: &str = "gpt-35-turbo";
pub const DEFAULT_AZURE_API_VERSION: &str = "2023-05-15";

/// Answers are capped to keep replies chat-sized.
pub const ANSWER_MAX_TOKENS: u32 = 300;

/// Reads the Azure OpenAI config from the process environment.
///
/// # Errors
/// Returns [`crate::error_handler::ConfigError`] when a variable is present
/// but malformed (endpoint scheme, timeout number).
pub fn config_azure_from_env() -> Result<Option<LlmModelConfig>> {
    config_azure_from(|name| std::env::var(name).ok())
}

/// Same as [`config_azure_from_env`], reading variables through `var`.
pub fn config_azure_from<F>(var: F) -> Result<Option<LlmModelConfig>>
where
    F: Fn(&'static str) -> Option<String>,
{
    let (Some(api_key), Some(endpoint)) = (
        non_empty(var("AZURE_OPENAI_API_KEY")),
        non_empty(var("AZURE_OPENAI_ENDPOINT")),
    ) else {
        return Ok(None);
    };

    validate_http_endpoint("AZURE_OPENAI_ENDPOINT", &endpoint)?;

    let model = non_empty(var("AZURE_OPENAI_DEPLOYMENT_NAME"))
        .unwrap_or_else(|| DEFAULT_AZURE_DEPLOYMENT.to_string());
    let api_version = non_empty(var("AZURE_OPENAI_API_VERSION"))
        .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string());
    let timeout_secs = parse_opt_u64("AZURE_OPENAI_TIMEOUT_SECS", var("AZURE_OPENAI_TIMEOUT_SECS"))?;

    Ok(Some(LlmModelConfig {
        provider: LlmProvider::AzureOpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        api_version: Some(api_version),
        max_tokens: Some(ANSWER_MAX_TOKENS),
        temperature: None,
        timeout_secs,
    }))
}
