//! OpenAPI description of the public routes.

use axum::Json;
use utoipa::OpenApi;

use super::handlers;
use crate::error::ErrorResponse;

/// OpenAPI document served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "novelty-api", description = "Novelty endpoints and probes"),
    paths(
        handlers::root,
        handlers::color,
        handlers::cat,
        handlers::random_photo,
        handlers::time,
        handlers::joke,
        handlers::scare,
        handlers::lookalike,
        handlers::health,
        handlers::ready,
    ),
    components(schemas(ErrorResponse)),
    tags(
        (name = "novelty", description = "Random values and proxied upstream content"),
        (name = "probes", description = "Liveness and readiness"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
