use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::predictions::dtos::PredictionResponseDto;
use crate::features::predictions::handlers::PredictionState;
use crate::features::predictions::models::FormState;
use crate::shared::types::ApiResponse;

/// Predict the price of a complete form in one call
#[utoipa::path(
    post,
    path = "/api/predictions",
    request_body = FormState,
    responses(
        (status = 200, description = "Predicted price", body = ApiResponse<PredictionResponseDto>),
        (status = 400, description = "Form incomplete"),
        (status = 502, description = "Prediction server failed")
    ),
    tag = "predictions"
)]
pub async fn create_prediction(
    State(state): State<PredictionState>,
    AppJson(form): AppJson<FormState>,
) -> Result<Json<ApiResponse<PredictionResponseDto>>> {
    let result = state.prediction_service.predict(&form).await?;
    Ok(Json(ApiResponse::success(Some(result.into()), None, None)))
}
