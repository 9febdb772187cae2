use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorsDto;

/// Reasons a write payload can be rejected.
///
/// Each variant captures what actually went wrong so it can be logged and
/// asserted on, while the client-facing response body stays a fixed
/// `{"errors": ["validation errors"]}` payload for every rejection.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was missing, empty, or zero.
    ///
    /// # Fields
    /// - `field` - Name of the offending field
    #[error("{field} must be set")]
    Required { field: &'static str },

    /// The request body was not valid JSON or did not match the expected shape.
    ///
    /// Covers malformed JSON, wrong field types, and unknown fields on
    /// endpoints that reject them.
    #[error("{0}")]
    MalformedBody(#[from] JsonRejection),

    /// The database rejected the write.
    ///
    /// Raised for any failure on the write path, including constraint
    /// violations and the entity save hooks.
    #[error(transparent)]
    WriteRejected(#[from] sea_orm::DbErr),
}

/// Converts validation errors into HTTP responses.
///
/// Every rejection maps to 422 Unprocessable Entity with the same fixed body.
/// The specific rejection reason is logged at warn level for diagnostics but
/// never leaks into the response.
///
/// # Returns
/// - 422 Unprocessable Entity with body `{"errors": ["validation errors"]}`
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected write: {}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorsDto {
                errors: vec!["validation errors".to_string()],
            }),
        )
            .into_response()
    }
}
