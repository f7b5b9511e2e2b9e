use utoipa::{Modify, OpenApi};

use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::predictions::{
    dtos as predictions_dtos, handlers as predictions_handlers, models as predictions_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Locations
        locations_handlers::list_islands,
        locations_handlers::list_provinces,
        locations_handlers::list_cities,
        // Sessions
        predictions_handlers::create_session,
        predictions_handlers::get_session,
        predictions_handlers::update_field,
        predictions_handlers::step_field,
        predictions_handlers::submit_session,
        predictions_handlers::delete_session,
        // Predictions
        predictions_handlers::create_prediction,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Locations
            locations_dtos::LocationOptionsDto,
            ApiResponse<locations_dtos::LocationOptionsDto>,
            // Form
            predictions_models::FormField,
            predictions_models::FormState,
            predictions_models::FormOptions,
            predictions_models::SubmitControl,
            predictions_models::ResultView,
            predictions_models::FormView,
            // Sessions
            predictions_dtos::FieldValue,
            predictions_dtos::UpdateFieldDto,
            predictions_dtos::StepFieldDto,
            predictions_dtos::SessionResponseDto,
            ApiResponse<predictions_dtos::SessionResponseDto>,
            // Predictions
            predictions_dtos::PredictionResponseDto,
            ApiResponse<predictions_dtos::PredictionResponseDto>,
        )
    ),
    tags(
        (name = "locations", description = "Cascading island / province / city options"),
        (name = "sessions", description = "Stateful house form sessions"),
        (name = "predictions", description = "House price predictions"),
    ),
    info(
        title = "HargaPro API",
        version = "0.1.0",
        description = "API documentation for HargaPro house price estimation",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
