use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::predictions::dtos::{
    FieldValue, SessionResponseDto, StepFieldDto, UpdateFieldDto,
};
use crate::features::predictions::handlers::PredictionState;
use crate::shared::types::ApiResponse;

/// Start a new empty form session
#[utoipa::path(
    post,
    path = "/api/sessions",
    responses(
        (status = 201, description = "Session created", body = ApiResponse<SessionResponseDto>)
    ),
    tag = "sessions"
)]
pub async fn create_session(
    State(state): State<PredictionState>,
) -> Result<(StatusCode, Json<ApiResponse<SessionResponseDto>>)> {
    let session = state.session_service.create().await;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(session), None, None)),
    ))
}

/// Get the current view of a form session
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session view", body = ApiResponse<SessionResponseDto>),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn get_session(
    State(state): State<PredictionState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let session = state.session_service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(session), None, None)))
}

/// Edit one field of the form
///
/// Selecting an island clears province and city; selecting a province
/// clears city. Numeric fields fall back to 0 on unparsable input.
#[utoipa::path(
    patch,
    path = "/api/sessions/{id}/fields",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = UpdateFieldDto,
    responses(
        (status = 200, description = "Updated session view", body = ApiResponse<SessionResponseDto>),
        (status = 400, description = "Unknown field"),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn update_field(
    State(state): State<PredictionState>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateFieldDto>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let raw_value = dto.value.map(FieldValue::into_raw).unwrap_or_default();
    let session = state
        .session_service
        .update_field(id, &dto.field, &raw_value)
        .await?;
    Ok(Json(ApiResponse::success(Some(session), None, None)))
}

/// Step a numeric field up or down, clamped at the field minimum
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/fields/{field}/step",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("field" = String, Path, description = "Numeric field name, e.g. jumlah_kamar_tidur")
    ),
    request_body = StepFieldDto,
    responses(
        (status = 200, description = "Updated session view", body = ApiResponse<SessionResponseDto>),
        (status = 400, description = "Unknown or non-numeric field"),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn step_field(
    State(state): State<PredictionState>,
    Path((id, field)): Path<(Uuid, String)>,
    AppJson(dto): AppJson<StepFieldDto>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let session = state
        .session_service
        .step_field(id, &field, dto.delta)
        .await?;
    Ok(Json(ApiResponse::success(Some(session), None, None)))
}

/// Submit the form for prediction
///
/// A failed prediction is reported in the session's result view, not as an
/// HTTP error. Submitting while a prediction is outstanding returns 409.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session view after the prediction", body = ApiResponse<SessionResponseDto>),
        (status = 400, description = "Form incomplete"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "A prediction is already in progress")
    ),
    tag = "sessions"
)]
pub async fn submit_session(
    State(state): State<PredictionState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let session = state.session_service.submit(id).await?;
    Ok(Json(ApiResponse::success(Some(session), None, None)))
}

/// Discard a form session
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn delete_session(
    State(state): State<PredictionState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.session_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
