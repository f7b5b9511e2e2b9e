use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::locations::dtos::{
    CityOptionsQuery, LocationOptionsDto, ProvinceOptionsQuery,
};
use crate::features::locations::services::LocationService;
use crate::shared::types::{ApiResponse, Meta};

fn options_response(options: Vec<String>) -> Json<ApiResponse<LocationOptionsDto>> {
    let total = options.len() as i64;
    Json(ApiResponse::success(
        Some(options.into()),
        None,
        Some(Meta { total }),
    ))
}

/// List island options
#[utoipa::path(
    get,
    path = "/api/locations/islands",
    responses(
        (status = 200, description = "Island labels in display order", body = ApiResponse<LocationOptionsDto>)
    ),
    tag = "locations"
)]
pub async fn list_islands(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<LocationOptionsDto>>> {
    Ok(options_response(service.island_options()))
}

/// List province options for the selected island
///
/// An unknown or missing island yields an empty list.
#[utoipa::path(
    get,
    path = "/api/locations/provinces",
    params(ProvinceOptionsQuery),
    responses(
        (status = 200, description = "Province labels under the island", body = ApiResponse<LocationOptionsDto>)
    ),
    tag = "locations"
)]
pub async fn list_provinces(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<ProvinceOptionsQuery>,
) -> Result<Json<ApiResponse<LocationOptionsDto>>> {
    let island = query.island.unwrap_or_default();
    Ok(options_response(service.province_options(&island)))
}

/// List city options for the selected island and province
///
/// Both labels must resolve, otherwise the list is empty.
#[utoipa::path(
    get,
    path = "/api/locations/cities",
    params(CityOptionsQuery),
    responses(
        (status = 200, description = "City labels under the province", body = ApiResponse<LocationOptionsDto>)
    ),
    tag = "locations"
)]
pub async fn list_cities(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<CityOptionsQuery>,
) -> Result<Json<ApiResponse<LocationOptionsDto>>> {
    let island = query.island.unwrap_or_default();
    let province = query.province.unwrap_or_default();
    Ok(options_response(service.city_options(&island, &province)))
}
