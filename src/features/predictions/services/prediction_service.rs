use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::predictions::clients::PredictionClient;
use crate::features::predictions::models::{FormState, PredictionResult};
use crate::features::predictions::services::form_controller::validate_form;

/// Stateless prediction for callers that hold the form themselves
pub struct PredictionService {
    client: Arc<dyn PredictionClient>,
}

impl PredictionService {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        Self { client }
    }

    /// Validate a complete form and forward it to the prediction server
    pub async fn predict(&self, form: &FormState) -> Result<PredictionResult> {
        validate_form(form)?;

        self.client.predict(form).await.map_err(|e| {
            tracing::warn!("One-shot prediction failed: {}", e);
            AppError::ExternalServiceError(e.user_message())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::predictions::clients::PredictionError;
    use async_trait::async_trait;

    struct FixedClient(std::result::Result<PredictionResult, PredictionError>);

    #[async_trait]
    impl PredictionClient for FixedClient {
        async fn predict(
            &self,
            _form: &FormState,
        ) -> std::result::Result<PredictionResult, PredictionError> {
            self.0.clone()
        }
    }

    fn complete_form() -> FormState {
        FormState {
            island: "Jawa".to_string(),
            province: "Jawa Barat".to_string(),
            city: "Bandung".to_string(),
            land_area: 200.0,
            building_area: 120.0,
            bedrooms: 4.0,
            bathrooms: 3.0,
            parking_capacity: 2.0,
        }
    }

    #[tokio::test]
    async fn test_predict_returns_result() {
        let service = PredictionService::new(Arc::new(FixedClient(Ok(PredictionResult {
            predicted_price: 950_000_000.0,
            currency: None,
        }))));

        let result = tokio_test::assert_ok!(service.predict(&complete_form()).await);
        assert_eq!(result.predicted_price, 950_000_000.0);
    }

    #[tokio::test]
    async fn test_remote_failure_maps_to_external_error() {
        let service = PredictionService::new(Arc::new(FixedClient(Err(
            PredictionError::Server {
                status: 400,
                message: Some("invalid input".to_string()),
            },
        ))));

        let error = tokio_test::assert_err!(service.predict(&complete_form()).await);
        assert!(matches!(error, AppError::ExternalServiceError(msg) if msg == "invalid input"));
    }

    #[tokio::test]
    async fn test_incomplete_form_rejected_before_request() {
        let service = PredictionService::new(Arc::new(FixedClient(Err(
            PredictionError::Transport("must not be called".to_string()),
        ))));

        let mut form = complete_form();
        form.city.clear();

        let error = service.predict(&form).await.unwrap_err();
        assert!(matches!(error, AppError::ValidationErrors(_)));
    }
}
