//! University FAQ assistant: menu dispatch, keyword retrieval, grounded answers.
//!
//! Public API: [`Dispatcher::handle`] for a chat message and
//! [`Dispatcher::main_menu`] for the top-level menu. Build the dispatcher once
//! with [`init_from_env`]; a missing knowledge base or missing model
//! credentials degrade the assistant instead of failing startup.

pub mod answer;
mod api_types;
pub mod dispatcher;
pub mod menu;
pub mod prompt;

use std::sync::Arc;

use ai_llm_service::config::default_config::config_azure_from_env;
use knowledge_base::{KnowledgeBase, KnowledgeBaseConfig};
use tracing::warn;

pub use answer::{AnswerEngine, DiagnosticAnswerEngine, LlmAnswerEngine, engine_from_config};
pub use api_types::{ButtonKind, ChatResponse, MenuNode};
pub use dispatcher::Dispatcher;
pub use menu::MenuTable;

/// One-time startup: load the knowledge base and pick the answer engine.
pub async fn init_from_env() -> Dispatcher {
    let kb_cfg = KnowledgeBaseConfig::from_env();
    let knowledge = KnowledgeBase::load_or_empty(&kb_cfg.path).await;

    let model_cfg = config_azure_from_env().unwrap_or_else(|err| {
        warn!(error = %err, "invalid model configuration");
        None
    });

    Dispatcher::new(
        MenuTable::university(),
        Arc::new(knowledge),
        engine_from_config(model_cfg),
    )
}
