//! r2iss-api
//!
//! JSON HTTP surface over the R2-ISS calculator for the web UI.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use config::ApiConfig;
use state::AppState;

/// Build the application router with all routes and layers attached.
pub fn build_router(config: ApiConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/score",
            post(routes::score::score).get(routes::score::score_query),
        )
        .route("/reference", get(routes::reference::reference_guide))
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
