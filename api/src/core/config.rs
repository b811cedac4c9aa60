use std::path::PathBuf;

/// Address used when `API_ADDRESS` is not set.
pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8001";

/// Directory used when `FRONTEND_DIR` is not set.
pub const DEFAULT_FRONTEND_DIR: &str = "frontend";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `host:port` to bind.
    pub address: String,
    /// Directory holding `index.html` and the widget assets.
    pub frontend_dir: PathBuf,
}

impl ApiConfig {
    /// Load settings from environment variables, with defaults.
    pub fn from_env() -> Self {
        Self {
            address: env_or("API_ADDRESS", DEFAULT_API_ADDRESS),
            frontend_dir: PathBuf::from(env_or("FRONTEND_DIR", DEFAULT_FRONTEND_DIR)),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
