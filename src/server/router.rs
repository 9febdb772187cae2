//! Router configuration for the HTTP API.
//!
//! This module wires every controller route into an axum router, generates the
//! OpenAPI schema from the handler annotations, and mounts the Swagger UI along
//! with the CORS and tracing middleware.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        home::{__path_home, home, HOME_TAG},
        scientist::{
            __path_create_scientist, __path_delete_scientist, __path_get_scientist_by_id,
            __path_get_scientists, __path_patch_scientist, create_scientist, delete_scientist,
            get_scientist_by_id, get_scientists, patch_scientist, SCIENTIST_TAG,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = HOME_TAG, description = "Service status"),
    (name = SCIENTIST_TAG, description = "Scientist management endpoints")
))]
struct ApiDoc;

/// Creates the application router with all routes and middleware.
///
/// Serves the API docs at `/docs` and the raw OpenAPI schema at
/// `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    // Permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(home))
        .routes(routes!(get_scientists, create_scientist))
        .routes(routes!(
            get_scientist_by_id,
            patch_scientist,
            delete_scientist
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
