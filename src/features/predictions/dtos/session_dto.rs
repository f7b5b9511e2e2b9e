use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::predictions::models::FormView;

/// Raw input value; numbers are accepted as-is and passed through the same
/// coercion as text
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn into_raw(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Number(number) => number.to_string(),
        }
    }
}

/// Request DTO for editing one form field
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldDto {
    /// Field name, e.g. `pulau`, `jumlah_kamar_tidur` or `bedrooms`
    #[schema(example = "pulau")]
    pub field: String,
    /// New value; `null` clears the field
    pub value: Option<FieldValue>,
}

/// Request DTO for the +/- stepper buttons
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepFieldDto {
    #[schema(example = 1)]
    pub delta: f64,
}

/// Response DTO for a form session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponseDto {
    pub id: Uuid,
    pub updated_at: DateTime<Utc>,
    pub view: FormView,
}
