//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::docs::openapi_json;
use super::handlers::{
    cat, color, health, joke, lookalike, random_photo, ready, root, scare, time, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Novelty endpoints
        .route("/color", get(color))
        .route("/cat", get(cat))
        .route("/random-photo", get(random_photo))
        .route("/time", get(time))
        .route("/joke", get(joke))
        .route("/scare", get(scare))
        .route("/lookalike", get(lookalike))
        // Health endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin, method and header, with credentials.
///
/// A wildcard origin cannot be combined with credentials, so the request's
/// own origin, method and headers are echoed back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
