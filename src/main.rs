use std::error::Error;

use ai_llm_service::telemetry;
use tracing::{Level, debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file, if there is one.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("info", Level::INFO))
        .with(telemetry::layer())
        .try_init()?;

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => debug!("no .env file, using process environment"),
        Err(err) => warn!(error = %err, "ignoring unreadable .env file"),
    }

    api::start().await?;

    Ok(())
}
