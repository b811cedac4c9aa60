use assistant::Dispatcher;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Menu table, knowledge base and answer engine; read-only after startup.
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Build the state from environment variables (see `assistant::init_from_env`).
    pub async fn from_env() -> Self {
        Self::new(assistant::init_from_env().await)
    }
}
