pub mod handlers;
pub mod types;

use crate::{Result, config::Config, dispatch::Dispatcher, llm::OpenAiClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub use handlers::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/bfhl", post(handlers::bfhl))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    if config.llm.api_key.is_empty() {
        warn!("No API key configured for text generation; AI requests will fail");
    }

    let timeout = Duration::from_secs(config.llm.timeout_secs);
    let generator = Arc::new(OpenAiClient::new(config.llm.clone())?);

    let app_state = AppState {
        official_email: Arc::from(config.server.official_email.as_str()),
        dispatcher: Arc::new(Dispatcher::new(generator, timeout)),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
