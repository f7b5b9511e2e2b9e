use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::predictions::models::PredictionResult;
use crate::shared::currency::format_rupiah;

/// Response DTO for a one-shot prediction
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponseDto {
    pub predicted_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Price formatted as Rupiah, e.g. `Rp 1.500.000.000`
    pub formatted_price: String,
}

impl From<PredictionResult> for PredictionResponseDto {
    fn from(result: PredictionResult) -> Self {
        Self {
            formatted_price: format_rupiah(result.predicted_price),
            predicted_price: result.predicted_price,
            currency: result.currency,
        }
    }
}
