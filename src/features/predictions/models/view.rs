use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::predictions::models::FormState;

/// What the result panel shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ResultView {
    Idle {
        message: String,
    },
    Loading {
        message: String,
    },
    Error {
        title: String,
        message: String,
    },
    Success {
        title: String,
        #[serde(rename = "predictedPrice")]
        predicted_price: f64,
        #[serde(rename = "formattedPrice")]
        formatted_price: String,
    },
}

/// Dropdown options for the current selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub islands: Vec<String>,
    pub provinces: Vec<String>,
    pub cities: Vec<String>,
    pub province_enabled: bool,
    pub city_enabled: bool,
}

/// Submit button state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

/// Everything the page needs to render after a state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub form: FormState,
    pub options: FormOptions,
    pub submit: SubmitControl,
    pub result: ResultView,
}
