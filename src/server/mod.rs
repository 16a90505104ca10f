//! HTTP server wiring
//!
//! Builds the axum router (JSON API under `/api`, static site everywhere
//! else) and runs it until a shutdown signal arrives.

pub mod error;
pub mod handlers;

use std::io;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::service::SummonerService;

/// Shared state handed to every handler.
pub struct AppState {
    /// Riot pipeline plus its caches.
    pub service: SummonerService,
    has_api_key: bool,
}

impl AppState {
    pub fn new(service: SummonerService, has_api_key: bool) -> Self {
        Self {
            service,
            has_api_key,
        }
    }

    /// Whether the server was started with a Riot API key. Without one the
    /// summoner endpoint always serves the demo snapshot.
    pub fn has_api_key(&self) -> bool {
        self.has_api_key
    }
}

/// Builds the application router.
pub fn create_router(state: Arc<AppState>, static_dir: &str) -> Router {
    let api_routes = Router::new()
        .route("/summoner", get(handlers::get_summoner))
        .route("/summoner/banner", post(handlers::set_banner))
        .route("/health", get(handlers::health))
        .fallback(handle_unknown_api_route);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves requests until Ctrl-C.
pub async fn run_server(config: &AppConfig, state: Arc<AppState>) -> io::Result<()> {
    let app = create_router(state, &config.static_dir);
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    info!("Yordlepedia server running at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn handle_unknown_api_route() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found." })))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(err) => {
            // Keep serving if the handler cannot be installed.
            error!("Failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::riot::RiotClient;

    fn test_state(has_api_key: bool) -> Arc<AppState> {
        let service = SummonerService::new(RiotClient::new("RGAPI-test"), 10, 4);
        Arc::new(AppState::new(service, has_api_key))
    }

    #[test]
    fn test_app_state_reports_api_key_presence() {
        assert!(test_state(true).has_api_key());
        assert!(!test_state(false).has_api_key());
    }

    #[test]
    fn test_create_router_builds() {
        let router = create_router(test_state(true), "site");
        // Building the router validates every route registration.
        let _ = router;
    }
}
