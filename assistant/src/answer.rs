//! Answer generation from retrieved context.
//!
//! [`AnswerEngine`] is chosen once at startup: [`LlmAnswerEngine`] when model
//! credentials exist, [`DiagnosticAnswerEngine`] otherwise. Neither ever
//! fails; problems become part of the answer text.

use std::{future::Future, pin::Pin, sync::Arc};

use ai_llm_service::{ChatModel, LlmModelConfig, OpenAiService};
use tracing::{error, info, warn};

use crate::prompt::build_system_prompt;

/// Boxed future returned by [`AnswerEngine::answer`].
pub type AnswerFuture<'a> = Pin<Box<dyn Future<Output = String> + Send + 'a>>;

/// Turns a query and its context string into reply text.
pub trait AnswerEngine: Send + Sync {
    fn answer<'a>(&'a self, query: &'a str, context: &'a str) -> AnswerFuture<'a>;
}

/// Asks a chat model, grounded by the system prompt.
pub struct LlmAnswerEngine {
    model: Arc<dyn ChatModel>,
}

impl LlmAnswerEngine {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

impl AnswerEngine for LlmAnswerEngine {
    fn answer<'a>(&'a self, query: &'a str, context: &'a str) -> AnswerFuture<'a> {
        Box::pin(async move {
            let system = build_system_prompt(context);
            match self.model.chat(&system, query).await {
                Ok(text) => text,
                Err(err) => {
                    error!(error = %err, "model call failed");
                    format!("Error contacting AI service: {err}")
                }
            }
        })
    }
}

/// Used when no model is configured: echoes the context it would have sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiagnosticAnswerEngine;

impl AnswerEngine for DiagnosticAnswerEngine {
    fn answer<'a>(&'a self, _query: &'a str, context: &'a str) -> AnswerFuture<'a> {
        Box::pin(async move {
            format!("[System]: Azure OpenAI not configured. \n\n**Context found:**\n{context}")
        })
    }
}

/// Picks the engine for a (possibly absent) model config.
///
/// A config that cannot produce a client degrades to the diagnostic engine.
pub fn engine_from_config(cfg: Option<LlmModelConfig>) -> Arc<dyn AnswerEngine> {
    let Some(cfg) = cfg else {
        warn!("Azure OpenAI credentials not found; answers will echo retrieved context");
        return Arc::new(DiagnosticAnswerEngine);
    };

    match OpenAiService::new(cfg) {
        Ok(svc) => {
            info!(model_url = %svc.url_chat(), "answers will be generated by the model");
            Arc::new(LlmAnswerEngine::new(Arc::new(svc)))
        }
        Err(err) => {
            warn!(error = %err, "model client could not be built; answers will echo retrieved context");
            Arc::new(DiagnosticAnswerEngine)
        }
    }
}
