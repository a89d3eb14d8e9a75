//! Destination Handlers
//!
//! HTTP handlers for destination CRUD operations. Access is open; no
//! authentication is required.
//!
//! Item updates resolve the target first, so an unknown id is reported as
//! not found whatever the body holds.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use validator::Validate;

use crate::domain::models::destination::DestinationId;
use crate::infrastructure::driving_adapters::api_rest::dto::destination::{
    CreateDestinationDto, DestinationResponseDto, PatchDestinationDto, UpdateDestinationDto,
    TEXT_FIELDS,
};
use crate::infrastructure::driving_adapters::api_rest::request::parse_json;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, ErrorResponse, UseCaseError};

/// Parse a path id; anything that is not an integer is simply not found
fn parse_id(raw: &str) -> Result<DestinationId, ApiError> {
    raw.parse::<DestinationId>().map_err(|_| {
        ApiError::UseCase(UseCaseError::NotFound {
            resource: "Destination".to_string(),
            id: raw.to_string(),
        })
    })
}

/// GET /api/destinations/ - List all destinations
#[utoipa::path(
    get,
    path = "/api/destinations/",
    responses(
        (status = 200, description = "All destinations", body = [DestinationResponseDto]),
    ),
    tag = "destinations"
)]
#[axum::debug_handler]
pub async fn list_destinations(
    State(state): State<AppState>,
) -> Result<Json<Vec<DestinationResponseDto>>, ApiError> {
    let destinations = state.list_destinations_use_case.execute().await?;

    let response: Vec<DestinationResponseDto> =
        destinations.into_iter().map(DestinationResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /api/destinations/ - Create a new destination
#[utoipa::path(
    post,
    path = "/api/destinations/",
    request_body = CreateDestinationDto,
    responses(
        (status = 201, description = "Destination created", body = DestinationResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
    ),
    tag = "destinations"
)]
#[axum::debug_handler]
pub async fn create_destination(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<DestinationResponseDto>), ApiError> {
    let dto: CreateDestinationDto = parse_json(payload, TEXT_FIELDS)?;
    dto.validate()?;

    let destination = state.create_destination_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(DestinationResponseDto::from(destination))))
}

/// GET /api/destinations/{id}/ - Get a destination by ID
#[utoipa::path(
    get,
    path = "/api/destinations/{id}/",
    params(
        ("id" = i64, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Destination found", body = DestinationResponseDto),
        (status = 404, description = "Destination does not exist", body = ErrorResponse),
    ),
    tag = "destinations"
)]
#[axum::debug_handler]
pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DestinationResponseDto>, ApiError> {
    let destination_id = parse_id(&id)?;

    let destination = state.get_destination_by_id_use_case.execute(destination_id).await?;

    Ok(Json(DestinationResponseDto::from(destination)))
}

/// PUT /api/destinations/{id}/ - Full update of a destination
#[utoipa::path(
    put,
    path = "/api/destinations/{id}/",
    params(
        ("id" = i64, Path, description = "Destination ID")
    ),
    request_body = UpdateDestinationDto,
    responses(
        (status = 200, description = "Destination updated", body = DestinationResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Destination does not exist", body = ErrorResponse),
    ),
    tag = "destinations"
)]
#[axum::debug_handler]
pub async fn update_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DestinationResponseDto>, ApiError> {
    let destination_id = parse_id(&id)?;
    state.get_destination_by_id_use_case.execute(destination_id).await?;

    let dto: UpdateDestinationDto = parse_json(payload, TEXT_FIELDS)?;
    dto.validate()?;

    let destination = state
        .update_destination_use_case
        .execute(destination_id, dto.into())
        .await?;

    Ok(Json(DestinationResponseDto::from(destination)))
}

/// PATCH /api/destinations/{id}/ - Partial update of a destination
#[utoipa::path(
    patch,
    path = "/api/destinations/{id}/",
    params(
        ("id" = i64, Path, description = "Destination ID")
    ),
    request_body = PatchDestinationDto,
    responses(
        (status = 200, description = "Destination updated", body = DestinationResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Destination does not exist", body = ErrorResponse),
    ),
    tag = "destinations"
)]
#[axum::debug_handler]
pub async fn partial_update_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DestinationResponseDto>, ApiError> {
    let destination_id = parse_id(&id)?;
    state.get_destination_by_id_use_case.execute(destination_id).await?;

    let dto: PatchDestinationDto = parse_json(payload, TEXT_FIELDS)?;
    dto.validate()?;

    let destination = state
        .update_destination_use_case
        .execute(destination_id, dto.into())
        .await?;

    Ok(Json(DestinationResponseDto::from(destination)))
}

/// DELETE /api/destinations/{id}/ - Delete a destination
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}/",
    params(
        ("id" = i64, Path, description = "Destination ID")
    ),
    responses(
        (status = 204, description = "Destination deleted"),
        (status = 404, description = "Destination does not exist", body = ErrorResponse),
    ),
    tag = "destinations"
)]
#[axum::debug_handler]
pub async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let destination_id = parse_id(&id)?;

    state.delete_destination_use_case.execute(destination_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id("12").unwrap(), DestinationId::new(12));
    }

    #[test]
    fn test_parse_id_maps_garbage_to_not_found() {
        let err = parse_id("paris").unwrap_err();
        assert!(matches!(err, ApiError::UseCase(UseCaseError::NotFound { .. })));
    }
}
