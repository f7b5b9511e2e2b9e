use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful answer of the prediction server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    /// Estimated price in whole Rupiah
    pub predicted_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}
