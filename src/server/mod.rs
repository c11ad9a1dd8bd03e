pub mod handlers;
pub mod page;
pub mod types;

use crate::{
    Error, Result,
    config::Config,
    generation::ResumeWriter,
    llm::{GeminiClient, LlmClient},
    resolver::ModelResolver,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/api/generate", post(handlers::generate))
        .route("/api/model", get(handlers::model))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolves the model once and binds the result into the application state.
/// A resolution failure produces a halted state rather than an error.
pub async fn prepare_state(config: &Config, client: Arc<dyn LlmClient>) -> AppState {
    let resolver = ModelResolver::new(client.clone(), config.llm.preferred_models.clone());

    match resolver.resolve().await {
        Ok(model) => {
            info!("Connected using model: {}", model);
            AppState::ready(ResumeWriter::new(client, model, config.llm.invocation))
        }
        Err(e) => {
            error!("{}", e);
            match e {
                Error::NoModelAvailable(cause) => AppState::halted(cause),
                other => AppState::halted(other.to_string()),
            }
        }
    }
}

pub async fn run(config: Config) -> Result<()> {
    let client: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(&config.llm)?);

    let app_state = prepare_state(&config, client).await;
    let app = build_router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
