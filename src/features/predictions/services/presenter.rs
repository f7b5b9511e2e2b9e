use crate::features::predictions::models::{PredictionResult, ResultView};
use crate::shared::constants::{ERROR_TITLE, IDLE_PROMPT, LOADING_MESSAGE, SUCCESS_TITLE};
use crate::shared::currency::format_rupiah;

/// Pick the result panel view.
///
/// Loading wins over an error and a stale result, an error wins over a stale
/// result, and with nothing at all the form prompt is shown.
pub fn present(
    result: Option<&PredictionResult>,
    is_loading: bool,
    error: Option<&str>,
) -> ResultView {
    if is_loading {
        return ResultView::Loading {
            message: LOADING_MESSAGE.to_string(),
        };
    }

    if let Some(message) = error {
        return ResultView::Error {
            title: ERROR_TITLE.to_string(),
            message: message.to_string(),
        };
    }

    match result {
        Some(result) => ResultView::Success {
            title: SUCCESS_TITLE.to_string(),
            predicted_price: result.predicted_price,
            formatted_price: format_rupiah(result.predicted_price),
        },
        None => ResultView::Idle {
            message: IDLE_PROMPT.to_string(),
        },
    }
}
