use std::{future::Future, pin::Pin};

use crate::error_handler::AiLlmError;

pub mod open_ai_service;

/// Boxed future returned by [`ChatModel::chat`].
pub type ChatFuture<'a> = Pin<Box<dyn Future<Output = Result<String, AiLlmError>> + Send + 'a>>;

/// Provider interface for a single `(system, user)` chat completion.
///
/// Implement this trait to plug in another backend or a scripted double in tests.
pub trait ChatModel: Send + Sync {
    /// Sends one system instruction and one user message, returns the reply text.
    fn chat<'a>(&'a self, system: &'a str, user: &'a str) -> ChatFuture<'a>;
}
