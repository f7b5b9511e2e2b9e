mod prediction_dto;
mod session_dto;

pub use prediction_dto::PredictionResponseDto;
pub use session_dto::{FieldValue, SessionResponseDto, StepFieldDto, UpdateFieldDto};
