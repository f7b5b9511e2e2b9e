use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/locations/islands", get(handlers::list_islands))
        .route("/api/locations/provinces", get(handlers::list_provinces))
        .route("/api/locations/cities", get(handlers::list_cities))
        .with_state(service)
}
