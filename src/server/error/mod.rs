//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error of the application. Handlers return it
//! directly and rely on its `IntoResponse` impl to pick the status code and
//! body, so no route needs its own error-to-response plumbing. Domain errors
//! with richer mappings, like `ValidationError`, plug in as variants that
//! delegate to their own conversion.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Wraps every failure a handler or the startup path can hit. `#[from]`
/// conversions let `?` lift source errors into it without ceremony.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Maps to 500 Internal Server Error; a broken configuration leaves
    /// nothing sensible to serve.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Rejected write payload.
    ///
    /// Delegates to `ValidationError::into_response()` which maps every
    /// rejection to a 422 Unprocessable Entity response.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Maps to 500 Internal Server Error; the cause is logged server-side
    /// and never echoed to the client.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the HTTP listener.
    ///
    /// Only occurs during startup, before any request is handled.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found.
    ///
    /// Maps to 404 Not Found with the message as the response body.
    #[error("{0}")]
    NotFound(String),
}

/// Maps each error variant to its HTTP response.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `ValidationErr`, delegated to `ValidationError::into_response()`
/// - 500 Internal Server Error - For everything else (DbErr, ConfigErr, IoErr)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper turning any displayable error into a 500 response.
///
/// The full error is logged at error level; the client only ever sees the
/// fixed "Internal server error" body. Fallback for variants without a more
/// specific mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
