//! HTTP controller layer exposing the REST API.
//!
//! This module contains the axum handlers for every route the application serves.
//! Controllers parse and validate incoming requests, delegate to the service layer,
//! and convert domain models to DTOs for the response. Each handler carries its
//! OpenAPI documentation via utoipa annotations.

pub mod home;
pub mod scientist;
