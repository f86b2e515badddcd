use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, REQUEST_ID_HEADER};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    let header = axum::http::HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(handlers::get_options))
        // Recommendations
        .route("/recommendations", post(handlers::recommend))
        .route("/recommendations/current", get(handlers::get_current))
        // Favorites
        .route(
            "/favorites",
            get(handlers::get_favorites)
                .post(handlers::add_favorite)
                .delete(handlers::remove_favorite),
        )
        .route("/favorites/current", post(handlers::add_current_favorite))
}
