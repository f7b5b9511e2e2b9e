use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::predictions::handlers::{self, PredictionState};
use crate::features::predictions::services::{PredictionService, SessionService};

/// Create routes for the predictions feature
pub fn routes(
    session_service: Arc<SessionService>,
    prediction_service: Arc<PredictionService>,
) -> Router {
    let state = PredictionState {
        session_service,
        prediction_service,
    };

    Router::new()
        .route("/api/sessions", post(handlers::create_session))
        .route(
            "/api/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/api/sessions/{id}/fields", patch(handlers::update_field))
        .route(
            "/api/sessions/{id}/fields/{field}/step",
            post(handlers::step_field),
        )
        .route("/api/sessions/{id}/submit", post(handlers::submit_session))
        .route("/api/predictions", post(handlers::create_prediction))
        .with_state(state)
}
