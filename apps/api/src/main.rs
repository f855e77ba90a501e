mod config;
mod errors;
mod export;
mod models;
mod preview;
mod redaction;
mod resumes;
mod routes;
mod state;
mod store;
mod suggestions;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::build_store;
use crate::suggestions::{KeywordJobMatcher, StaticSuggestionProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log level is known
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config)?;

    // Deterministic catalog backends; swap for an inference service here
    let suggestions = Arc::new(StaticSuggestionProvider);
    let job_matcher = Arc::new(KeywordJobMatcher);

    let state = AppState {
        config: config.clone(),
        store,
        suggestions,
        job_matcher,
    };

    // The editor is a browser client on another origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
