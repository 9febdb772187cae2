use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        scientist::{CreateScientistDto, ScientistDto, ScientistListItemDto, UpdateScientistDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::scientist::{CreateScientistParams, UpdateScientistParams},
        service::scientist::ScientistService,
        state::AppState,
    },
};

/// Tag for grouping scientist endpoints in OpenAPI documentation
pub static SCIENTIST_TAG: &str = "scientist";

/// Get all scientists.
///
/// Returns every scientist as a summary without mission data, ordered by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of scientists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/scientists",
    tag = SCIENTIST_TAG,
    responses(
        (status = 200, description = "Successfully retrieved scientists", body = Vec<ScientistListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scientists(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ScientistService::new(&state.db);

    let scientists = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            scientists
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new scientist.
///
/// Creates a scientist from the provided name and field of study. Both fields
/// are required and must be non-empty.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Scientist creation data (name and field of study)
///
/// # Returns
/// - `201 Created` - Successfully created scientist
/// - `422 Unprocessable Entity` - Missing or empty required fields, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/scientists",
    tag = SCIENTIST_TAG,
    request_body = CreateScientistDto,
    responses(
        (status = 201, description = "Successfully created scientist", body = ScientistDto),
        (status = 422, description = "Invalid scientist data", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_scientist(
    State(state): State<AppState>,
    payload: Result<Json<CreateScientistDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;

    let service = ScientistService::new(&state.db);

    // Convert DTO to server model
    let params = CreateScientistParams::from_dto(payload);

    let scientist = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(scientist.into_dto())))
}

/// Get a specific scientist by ID.
///
/// Returns the scientist together with all of their missions, each mission
/// embedding its destination planet.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Scientist ID to fetch
///
/// # Returns
/// - `200 OK` - Scientist details with missions
/// - `404 Not Found` - Scientist not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(
        ("id" = i32, Path, description = "Scientist ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved scientist", body = ScientistDto),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scientist_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScientistService::new(&state.db);

    let scientist = service.get_by_id(id).await?;

    match scientist {
        Some(scientist) => Ok((StatusCode::OK, Json(scientist.into_dto()))),
        None => Err(AppError::NotFound("Scientist not found".to_string())),
    }
}

/// Partially update a scientist.
///
/// Updates only the provided fields. A provided field must be non-empty,
/// and unknown fields are rejected.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Scientist ID to update
/// - `payload` - Fields to update (name and/or field of study)
///
/// # Returns
/// - `202 Accepted` - Successfully updated scientist
/// - `404 Not Found` - Scientist not found
/// - `422 Unprocessable Entity` - Empty field value, unknown field, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(
        ("id" = i32, Path, description = "Scientist ID")
    ),
    request_body = UpdateScientistDto,
    responses(
        (status = 202, description = "Successfully updated scientist", body = ScientistDto),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 422, description = "Invalid scientist data", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_scientist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateScientistDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScientistService::new(&state.db);

    // A missing scientist takes precedence over any payload error
    if !service.exists(id).await? {
        return Err(AppError::NotFound("Scientist not found".to_string()));
    }

    let Json(payload) = payload.map_err(ValidationError::from)?;

    // Convert DTO to server model
    let params = UpdateScientistParams::from_dto(payload);

    let scientist = service.update(id, params).await?;

    match scientist {
        Some(scientist) => Ok((StatusCode::ACCEPTED, Json(scientist.into_dto()))),
        None => Err(AppError::NotFound("Scientist not found".to_string())),
    }
}

/// Delete a scientist.
///
/// Deletes the scientist along with all of their missions.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Scientist ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted scientist and their missions
/// - `404 Not Found` - Scientist not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(
        ("id" = i32, Path, description = "Scientist ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted scientist"),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_scientist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScientistService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Scientist not found".to_string()))
    }
}
