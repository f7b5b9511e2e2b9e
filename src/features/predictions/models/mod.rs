mod form_state;
mod prediction;
mod view;

pub use form_state::{FormField, FormState};
pub use prediction::PredictionResult;
pub use view::{FormOptions, FormView, ResultView, SubmitControl};
