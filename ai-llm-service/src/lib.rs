//! Chat-completion client shared by the assistant.
//!
//! - [`config`] describes a model deployment and reads it from the environment.
//! - [`services`] holds the [`services::ChatModel`] seam and the HTTP client behind it.
//! - [`error_handler`] is the unified error type for the crate.
//! - [`telemetry`] has the `tracing` layer used by the binary.

pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::AiLlmError;
pub use services::{ChatFuture, ChatModel, open_ai_service::OpenAiService};
