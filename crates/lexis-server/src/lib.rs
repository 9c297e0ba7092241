//! # lexis-server
//!
//! HTTP front end for the English ⇄ Igala translation and back-translation
//! quality service. This crate wires the dictionary, translator and history
//! together; no other `lexis-*` crate depends on it.
//!
//! ## Endpoints
//!
//! - `GET /health`: status, version and dictionary size
//! - `POST /translate`: dictionary translation of one text
//! - `POST /translate/batch`: translate several texts
//! - `POST /back-translate`: round-trip one text and score it
//! - `POST /back-translate/batch`: round-trip several texts with a summary
//! - `POST /translation-quality`: score a caller-supplied translation
//! - `POST /detect-language`: English, Igala or unknown
//! - `POST /suggestions`: headword completions
//! - `POST /pos-tags`: part-of-speech tags for English text
//! - `GET /quality-report/{user_id}`: per-user score history

pub mod error;
pub mod history;
pub mod logging;
pub mod models;
pub mod routes;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use lexis_config::Config;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the router with state created from `LEXIS_*` environment variables.
///
/// Use [`build_app_with_state`] to share the state with other components.
pub fn build_app() -> Router {
    build_app_with_state(AppState::new(Config::new()))
}

/// Build the router around an existing [`AppState`].
///
/// ```no_run
/// use lexis_config::Config;
/// use lexis_server::build_app_with_state;
/// use lexis_server::state::AppState;
///
/// #[tokio::main]
/// async fn main() {
///     let app = build_app_with_state(AppState::new(Config::default()));
///     let listener = tokio::net::TcpListener::bind("0.0.0.0:10000").await.unwrap();
///     axum::serve(listener, app).await.unwrap();
/// }
/// ```
pub fn build_app_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/translate", post(routes::translate))
        .route("/translate/batch", post(routes::translate_batch))
        .route("/back-translate", post(routes::back_translate))
        .route("/back-translate/batch", post(routes::back_translate_batch))
        .route("/translation-quality", post(routes::translation_quality))
        .route("/detect-language", post(routes::detect_language))
        .route("/suggestions", post(routes::suggestions))
        .route("/pos-tags", post(routes::pos_tags))
        .route("/quality-report/{user_id}", get(routes::quality_report))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind the configured address and serve until `shutdown` is cancelled
pub async fn serve(state: Arc<AppState>, shutdown: CancellationToken) -> anyhow::Result<()> {
    let addr = state.config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        entries = state.processor.metadata().entry_count,
        "lexis server listening"
    );

    axum::serve(listener, build_app_with_state(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}
