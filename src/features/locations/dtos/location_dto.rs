use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for province options
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceOptionsQuery {
    /// Selected island label (exact match)
    #[param(example = "Jawa")]
    pub island: Option<String>,
}

/// Query parameters for city options
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CityOptionsQuery {
    /// Selected island label (exact match)
    #[param(example = "Jawa")]
    pub island: Option<String>,
    /// Selected province label (exact match)
    #[param(example = "DI Yogyakarta")]
    pub province: Option<String>,
}

/// Option list for one dropdown level
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationOptionsDto {
    pub options: Vec<String>,
}

impl From<Vec<String>> for LocationOptionsDto {
    fn from(options: Vec<String>) -> Self {
        Self { options }
    }
}
