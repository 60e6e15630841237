pub mod menu;

use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::{handle_panic, ApiError};
use crate::state::AppState;

/// Largest accepted request body; bigger bodies fail to read.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn endpoint_not_found() -> ApiError {
    ApiError::EndpointNotFound
}

/// Build the full application router: menu CRUD, health, and the 404 fallback.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Unsupported methods on a known path answer like unknown paths.
    let menu_routes = Router::new()
        .route(
            "/api/menu",
            get(menu::list_items)
                .post(menu::create_item)
                .fallback(endpoint_not_found),
        )
        .route(
            "/api/menu/:id",
            get(menu::get_item)
                .put(menu::replace_item)
                .delete(menu::delete_item)
                .fallback(endpoint_not_found),
        );

    Router::new()
        .route("/health", get(health))
        .merge(menu_routes)
        .fallback(endpoint_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
