use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        bird::{BirdDto, BirdInputDto},
    },
    server::{error::AppError, service::bird::BirdService, state::AppState},
};

/// Tag for grouping bird endpoints in OpenAPI documentation
pub static BIRD_TAG: &str = "birds";

const NOT_FOUND_MESSAGE: &str = "Bird not found";

/// List every bird.
///
/// # Returns
/// - `200 OK` - All birds, possibly empty
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/birds",
    tag = BIRD_TAG,
    responses(
        (status = 200, description = "All birds", body = DataDto<Vec<BirdDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_birds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Attempting to fetch all birds");

    let birds = BirdService::new(&state.db)
        .get_all()
        .await
        .inspect_err(|e| tracing::error!(error = %e, details = ?e, "Error fetching birds"))?;

    let birds: Vec<BirdDto> = birds.into_iter().map(|bird| bird.into_dto()).collect();

    Ok(Json(DataDto::success(birds)))
}

/// Create a bird.
///
/// The body must carry a non-empty `name` and `breed` and a numeric `age`.
/// Any other field, including `id` and the timestamps, is ignored.
///
/// # Returns
/// - `200 OK` - The stored bird with its assigned id and timestamps
/// - `400 Bad Request` - Body is not valid JSON
/// - `500 Internal Server Error` - Validation or store failure
#[utoipa::path(
    post,
    path = "/api/birds",
    tag = BIRD_TAG,
    request_body = BirdInputDto,
    responses(
        (status = 200, description = "Created bird", body = DataDto<BirdDto>),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Validation or internal error", body = ErrorDto)
    ),
)]
pub async fn create_bird(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(bird_data = %payload, "Attempting to create bird");

    let bird = BirdService::new(&state.db)
        .create(&payload)
        .await
        .inspect_err(|e| {
            tracing::error!(bird_data = %payload, error = %e, details = ?e, "Error creating bird")
        })?;

    Ok(Json(DataDto::success(bird.into_dto())))
}

/// Get a bird by id.
///
/// A malformed id is reported the same way as an unknown one.
///
/// # Returns
/// - `200 OK` - The bird
/// - `404 Not Found` - No bird with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/birds/{id}",
    tag = BIRD_TAG,
    params(
        ("id" = String, Path, description = "24 character hex bird id")
    ),
    responses(
        (status = 200, description = "The bird", body = DataDto<BirdDto>),
        (status = 404, description = "Bird not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bird_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(bird_id = %id, "Attempting to fetch bird");

    let bird = BirdService::new(&state.db)
        .get_by_id(&id)
        .await
        .inspect_err(|e| {
            tracing::error!(bird_id = %id, error = %e, details = ?e, "Error fetching bird")
        })?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(DataDto::success(bird.into_dto())))
}

/// Replace a bird's `name`, `breed` and `age`.
///
/// The body is validated like a create payload; `updatedAt` is refreshed.
///
/// # Returns
/// - `200 OK` - The bird after the update
/// - `400 Bad Request` - Body is not valid JSON
/// - `404 Not Found` - No bird with that id
/// - `500 Internal Server Error` - Validation or store failure
#[utoipa::path(
    put,
    path = "/api/birds/{id}",
    tag = BIRD_TAG,
    params(
        ("id" = String, Path, description = "24 character hex bird id")
    ),
    request_body = BirdInputDto,
    responses(
        (status = 200, description = "Updated bird", body = DataDto<BirdDto>),
        (status = 400, description = "Malformed JSON body"),
        (status = 404, description = "Bird not found", body = ErrorDto),
        (status = 500, description = "Validation or internal error", body = ErrorDto)
    ),
)]
pub async fn update_bird(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(bird_id = %id, bird_data = %payload, "Attempting to update bird");

    let bird = BirdService::new(&state.db)
        .update(&id, &payload)
        .await
        .inspect_err(|e| {
            tracing::error!(
                bird_id = %id,
                bird_data = %payload,
                error = %e,
                details = ?e,
                "Error updating bird"
            )
        })?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(DataDto::success(bird.into_dto())))
}

/// Delete a bird.
///
/// # Returns
/// - `200 OK` - The deleted bird as it was last stored
/// - `404 Not Found` - No bird with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/api/birds/{id}",
    tag = BIRD_TAG,
    params(
        ("id" = String, Path, description = "24 character hex bird id")
    ),
    responses(
        (status = 200, description = "Deleted bird", body = DataDto<BirdDto>),
        (status = 404, description = "Bird not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bird(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(bird_id = %id, "Attempting to delete bird");

    let bird = BirdService::new(&state.db)
        .delete(&id)
        .await
        .inspect_err(|e| {
            tracing::error!(bird_id = %id, error = %e, details = ?e, "Error deleting bird")
        })?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(DataDto::success(bird.into_dto())))
}

fn not_found(id: &str) -> AppError {
    tracing::warn!(bird_id = %id, "Bird not found");
    AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
}
