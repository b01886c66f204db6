/// API route modules
pub mod health;
pub mod playlists;

use crate::{middleware, state::AppState};
use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router. Every route except `/api/health` requires a bearer token.
pub fn router(app_state: AppState, max_upload_bytes: usize) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new().route("/health", get(health::health));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route(
            "/playlists/upload",
            post(playlists::upload_playlists).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/playlists", get(playlists::list_playlists))
        .route(
            "/playlists/:id",
            get(playlists::get_playlist).delete(playlists::delete_playlist),
        )
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state)
}
