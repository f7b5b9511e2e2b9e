use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::core::config::PredictionConfig;
use crate::core::error::{AppError, Result};
use crate::features::predictions::models::{FormState, PredictionResult};
use crate::shared::constants::DEFAULT_PREDICTION_ERROR;

/// Why a prediction attempt failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Prediction server returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Server { status: u16, message: Option<String> },

    #[error("Invalid prediction response: {0}")]
    InvalidResponse(String),

    #[error("Prediction request failed: {0}")]
    Transport(String),

    #[error("Prediction request was cancelled")]
    Cancelled,
}

impl PredictionError {
    /// Message shown to the user: the server's own `error` text when it sent
    /// one, the generic fallback otherwise
    pub fn user_message(&self) -> String {
        match self {
            PredictionError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => DEFAULT_PREDICTION_ERROR.to_string(),
        }
    }
}

/// Error body of the prediction server
#[derive(Debug, Deserialize)]
struct PredictionErrorResponse {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Remote house-price model
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Send one prediction request. No retries.
    async fn predict(
        &self,
        form: &FormState,
    ) -> std::result::Result<PredictionResult, PredictionError>;
}

/// Client for the `POST /predict` endpoint
pub struct HttpPredictionClient {
    http_client: reqwest::Client,
    predict_url: String,
}

impl HttpPredictionClient {
    pub fn new(config: &PredictionConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent("HargaPro/1.0 (house-price-form)")
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            predict_url: config.predict_url(),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(
        &self,
        form: &FormState,
    ) -> std::result::Result<PredictionResult, PredictionError> {
        tracing::debug!(
            "Requesting prediction for {}/{}/{}",
            form.island,
            form.province,
            form.city
        );

        let response = self
            .http_client
            .post(&self.predict_url)
            .json(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Prediction request failed: {:?}", e);
                PredictionError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read prediction response: {:?}", e);
            PredictionError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<PredictionErrorResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .and_then(|e| e.as_str().map(str::to_string))
                .filter(|m| !m.is_empty());
            tracing::warn!(
                "Prediction server returned status {}: {:?}",
                status,
                message
            );
            return Err(PredictionError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice::<PredictionResult>(&body).map_err(|e| {
            tracing::error!("Failed to parse prediction response: {:?}", e);
            PredictionError::InvalidResponse(e.to_string())
        })
    }
}
