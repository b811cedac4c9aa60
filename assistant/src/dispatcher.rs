//! Routes one chat message to a menu or to retrieval + answer generation.

use std::sync::Arc;

use knowledge_base::{KnowledgeBase, find_context};
use tracing::debug;

use crate::{
    answer::AnswerEngine,
    api_types::ChatResponse,
    menu::{self, INIT_TOKEN, MenuTable},
};

/// Request dispatcher. Immutable after construction; share it behind an `Arc`.
pub struct Dispatcher {
    menu: MenuTable,
    knowledge: Arc<KnowledgeBase>,
    engine: Arc<dyn AnswerEngine>,
}

impl Dispatcher {
    pub fn new(menu: MenuTable, knowledge: Arc<KnowledgeBase>, engine: Arc<dyn AnswerEngine>) -> Self {
        Self {
            menu,
            knowledge,
            engine,
        }
    }

    /// Payload of the top-level menu.
    pub fn main_menu(&self) -> ChatResponse {
        self.menu.respond(INIT_TOKEN).unwrap_or_else(menu::main_menu)
    }

    /// Handles one message.
    ///
    /// The message is lower-cased; a menu token returns its static payload,
    /// anything else is answered from the knowledge base and followed by the
    /// "Ask Another Question" / "Main Menu" buttons.
    pub async fn handle(&self, message: &str) -> ChatResponse {
        let msg = message.to_lowercase();

        if let Some(resp) = self.menu.respond(&msg) {
            debug!(token = %msg, "dispatch: menu");
            return resp;
        }

        let context = find_context(&self.knowledge, &msg);
        debug!(query = %msg, context_len = context.len(), "dispatch: answer");

        let text = self.engine.answer(&msg, &context).await;
        ChatResponse::with_text(text, menu::follow_up_buttons())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::answer::{AnswerFuture, DiagnosticAnswerEngine};

    /// Remembers every (query, context) pair it is asked about.
    #[derive(Default)]
    struct RecordingEngine {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl AnswerEngine for RecordingEngine {
        fn answer<'a>(&'a self, query: &'a str, context: &'a str) -> AnswerFuture<'a> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), context.to_string()));
            Box::pin(async { "generated".to_string() })
        }
    }

    fn kb() -> Arc<KnowledgeBase> {
        Arc::new(
            KnowledgeBase::from_json_str(
                r#"{"fees": {"tuition_in_state": {"content": "In-state tuition is $10,000/year.", "url": "https://example.edu/tuition"}}}"#,
            )
            .unwrap(),
        )
    }

    fn dispatcher(engine: Arc<dyn AnswerEngine>) -> Dispatcher {
        Dispatcher::new(MenuTable::university(), kb(), engine)
    }

    #[tokio::test]
    async fn menu_tokens_ignore_case() {
        let engine = Arc::new(RecordingEngine::default());
        let d = dispatcher(engine.clone());

        for token in ["academic_programs", "admissions", "tuition", "campus_life", "init"] {
            let expected = MenuTable::university().respond(token).unwrap();
            assert_eq!(d.handle(token).await, expected);
            assert_eq!(d.handle(&token.to_uppercase()).await, expected);
        }
        assert!(engine.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_equals_main_menu() {
        let d = dispatcher(Arc::new(DiagnosticAnswerEngine));
        assert_eq!(d.handle("init").await, d.main_menu());
        assert_eq!(d.main_menu().text, None);
    }

    #[tokio::test]
    async fn other_messages_are_answered_with_follow_ups() {
        let engine = Arc::new(RecordingEngine::default());
        let d = dispatcher(engine.clone());

        let resp = d.handle("Fees_Tuition_In_State").await;
        assert_eq!(resp.text.as_deref(), Some("generated"));
        assert_eq!(resp.buttons, menu::follow_up_buttons());

        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls[0].0, "fees_tuition_in_state");
        assert_eq!(
            calls[0].1,
            "[FEES - Tuition_in_state]: In-state tuition is $10,000/year. (Source: https://example.edu/tuition)"
        );
    }

    #[tokio::test]
    async fn degraded_mode_echoes_context_verbatim() {
        let d = dispatcher(Arc::new(DiagnosticAnswerEngine));
        let resp = d.handle("where do i park?").await;
        let text = resp.text.unwrap();
        assert!(text.contains("Azure OpenAI not configured"));
        assert!(text.ends_with("No specific internal data found."));
    }
}
