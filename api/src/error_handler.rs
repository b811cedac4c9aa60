use thiserror::Error;

/// Server lifecycle errors. Request handling itself never fails: every
/// chat problem is reported inside a normal reply.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to bind listener on {address}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),
}

/// Handy result alias for startup code.
pub type AppResult<T> = Result<T, AppError>;
