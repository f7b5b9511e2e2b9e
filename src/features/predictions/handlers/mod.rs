mod prediction_handler;
mod session_handler;

pub use prediction_handler::*;
pub use session_handler::*;

use std::sync::Arc;

use crate::features::predictions::services::{PredictionService, SessionService};

/// State for prediction handlers
#[derive(Clone)]
pub struct PredictionState {
    pub session_service: Arc<SessionService>,
    pub prediction_service: Arc<PredictionService>,
}
