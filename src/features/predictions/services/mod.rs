mod form_controller;
mod prediction_service;
mod presenter;
mod session_service;

pub use prediction_service::PredictionService;
pub use session_service::SessionService;
