use axum::http::StatusCode;

/// Tag for grouping the root endpoint in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// Root endpoint.
///
/// Responds with an empty 200 body, serving as the health check target.
///
/// # Returns
/// - `200 OK` - Service is up
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Service is up")
    ),
)]
pub async fn home() -> StatusCode {
    StatusCode::OK
}
