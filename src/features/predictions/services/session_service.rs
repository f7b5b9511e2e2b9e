use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::locations::LocationService;
use crate::features::predictions::clients::{PredictionClient, PredictionError};
use crate::features::predictions::dtos::SessionResponseDto;
use crate::features::predictions::models::{
    FormField, FormState, FormView, PredictionResult, SubmitControl,
};
use crate::features::predictions::services::form_controller::FormController;
use crate::features::predictions::services::presenter::present;
use crate::shared::constants::{SUBMISSION_IN_PROGRESS, SUBMIT_LABEL, SUBMIT_LABEL_BUSY};

/// One visitor's form together with its result, error and loading flag
#[derive(Debug)]
pub struct FormSession {
    id: Uuid,
    controller: FormController,
    result: Option<PredictionResult>,
    error: Option<String>,
    is_loading: bool,
    updated_at: DateTime<Utc>,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            controller: FormController::new(),
            result: None,
            error: None,
            is_loading: false,
            updated_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn update_field(&mut self, name: &str, raw_value: &str) -> Result<FormField> {
        let field = self.controller.update_field_by_name(name, raw_value)?;
        self.touch();
        Ok(field)
    }

    pub fn step_field(&mut self, name: &str, delta: f64) -> Result<f64> {
        let field: FormField = name.parse()?;
        let value = self.controller.step_numeric_field(field, delta)?;
        self.touch();
        Ok(value)
    }

    /// Enter the loading state and hand out the form to send.
    ///
    /// Refused while another submission is outstanding. An incomplete form is
    /// rejected before anything changes.
    pub fn begin_submission(&mut self) -> Result<FormState> {
        if self.is_loading {
            return Err(AppError::Conflict(SUBMISSION_IN_PROGRESS.to_string()));
        }
        self.controller.validate()?;

        self.is_loading = true;
        self.result = None;
        self.error = None;
        self.touch();

        Ok(self.controller.state().clone())
    }

    /// Store the outcome of the submission started by [`Self::begin_submission`]
    pub fn finish_submission(
        &mut self,
        outcome: std::result::Result<PredictionResult, PredictionError>,
    ) {
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(error) => self.error = Some(error.user_message()),
        }
        self.is_loading = false;
        self.touch();
    }

    /// Derive the full page view from the current state
    pub fn view(&self, locations: &LocationService) -> FormView {
        FormView {
            form: self.controller.state().clone(),
            options: self.controller.options(locations),
            submit: SubmitControl {
                enabled: !self.is_loading,
                label: if self.is_loading {
                    SUBMIT_LABEL_BUSY.to_string()
                } else {
                    SUBMIT_LABEL.to_string()
                },
            },
            result: present(
                self.result.as_ref(),
                self.is_loading,
                self.error.as_deref(),
            ),
        }
    }

    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        !self.is_loading
            && now
                .signed_duration_since(self.updated_at)
                .to_std()
                .is_ok_and(|idle| idle > ttl)
    }
}

/// Submission whose outcome has not been stored yet.
///
/// Dropping it before [`Self::complete`] (client disconnect, aborted task)
/// closes the submission with a cancellation error, so the session leaves the
/// loading state and can be submitted again.
struct PendingSubmission {
    id: Uuid,
    session: Option<Arc<Mutex<FormSession>>>,
}

impl PendingSubmission {
    fn new(id: Uuid, session: Arc<Mutex<FormSession>>) -> Self {
        Self {
            id,
            session: Some(session),
        }
    }

    fn complete(mut self) {
        self.session = None;
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        tracing::warn!("Session {} submission cancelled before completion", self.id);

        match session.try_lock() {
            Ok(mut guard) => guard.finish_submission(Err(PredictionError::Cancelled)),
            Err(_) => match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let session = Arc::clone(&session);
                    handle.spawn(async move {
                        session
                            .lock()
                            .await
                            .finish_submission(Err(PredictionError::Cancelled));
                    });
                }
                Err(_) => tracing::error!(
                    "Session {} left loading: no runtime to release it",
                    self.id
                ),
            },
        };
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of form sessions.
///
/// Each session sits behind its own lock. The lock is released while a
/// prediction request is outstanding so the session keeps answering with its
/// loading view.
pub struct SessionService {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<FormSession>>>>,
    locations: Arc<LocationService>,
    client: Arc<dyn PredictionClient>,
    ttl: Duration,
}

impl SessionService {
    pub fn new(
        locations: Arc<LocationService>,
        client: Arc<dyn PredictionClient>,
        ttl: Duration,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            locations,
            client,
            ttl,
        }
    }

    fn snapshot(&self, session: &FormSession) -> SessionResponseDto {
        SessionResponseDto {
            id: session.id(),
            updated_at: session.updated_at(),
            view: session.view(&self.locations),
        }
    }

    async fn session(&self, id: Uuid) -> Result<Arc<Mutex<FormSession>>> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
    }

    /// Start an empty form
    pub async fn create(&self) -> SessionResponseDto {
        let session = FormSession::new();
        let id = session.id();
        let snapshot = self.snapshot(&session);

        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        tracing::debug!("Created form session {}", id);

        snapshot
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionResponseDto> {
        let session = self.session(id).await?;
        let guard = session.lock().await;
        Ok(self.snapshot(&guard))
    }

    pub async fn update_field(
        &self,
        id: Uuid,
        name: &str,
        raw_value: &str,
    ) -> Result<SessionResponseDto> {
        let session = self.session(id).await?;
        let mut guard = session.lock().await;
        let field = guard.update_field(name, raw_value)?;
        tracing::debug!("Session {} updated field {}", id, field);
        Ok(self.snapshot(&guard))
    }

    pub async fn step_field(&self, id: Uuid, name: &str, delta: f64) -> Result<SessionResponseDto> {
        let session = self.session(id).await?;
        let mut guard = session.lock().await;
        let value = guard.step_field(name, delta)?;
        tracing::debug!("Session {} stepped {} to {}", id, name, value);
        Ok(self.snapshot(&guard))
    }

    /// Send the session's form to the prediction server.
    ///
    /// A second call while the first is outstanding fails with a conflict and
    /// sends nothing. Remote failures are stored on the session, not returned.
    pub async fn submit(&self, id: Uuid) -> Result<SessionResponseDto> {
        let session = self.session(id).await?;

        let form = {
            let mut guard = session.lock().await;
            guard.begin_submission()?
        };
        let pending = PendingSubmission::new(id, Arc::clone(&session));

        tracing::info!(
            "Session {} submitting prediction for {} / {} / {}",
            id,
            form.island,
            form.province,
            form.city
        );
        let outcome = self.client.predict(&form).await;
        match &outcome {
            Ok(result) => tracing::info!(
                "Session {} received prediction {}",
                id,
                result.predicted_price
            ),
            Err(e) => tracing::warn!("Session {} prediction failed: {}", id, e),
        }

        let mut guard = session.lock().await;
        guard.finish_submission(outcome);
        pending.complete();
        Ok(self.snapshot(&guard))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
    }

    /// Drop sessions idle for longer than the TTL. Busy sessions are kept.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) => !guard.is_expired(now, self.ttl),
            Err(_) => true,
        });

        before - sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::predictions::models::ResultView;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Fake model: counts calls and answers once released
    struct GatedClient {
        calls: AtomicUsize,
        started: Notify,
        release: Notify,
        outcome: std::result::Result<PredictionResult, PredictionError>,
    }

    impl GatedClient {
        fn new(outcome: std::result::Result<PredictionResult, PredictionError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                started: Notify::new(),
                release: Notify::new(),
                outcome,
            })
        }
    }

    #[async_trait]
    impl PredictionClient for GatedClient {
        async fn predict(
            &self,
            _form: &FormState,
        ) -> std::result::Result<PredictionResult, PredictionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.started.notify_one();
            self.release.notified().await;
            self.outcome.clone()
        }
    }

    fn service_with(client: Arc<GatedClient>) -> Arc<SessionService> {
        Arc::new(SessionService::new(
            Arc::new(LocationService::default()),
            client,
            Duration::from_secs(3600),
        ))
    }

    async fn fill(service: &SessionService, id: Uuid) {
        for (name, value) in [
            ("pulau", "Jawa"),
            ("provinsi", "DI Yogyakarta"),
            ("kota", "Sleman"),
            ("luas_tanah", "150"),
            ("luas_bangunan", "100"),
            ("jumlah_kamar_tidur", "3"),
            ("jumlah_kamar_mandi", "2"),
            ("muatan_parkir", "1"),
        ] {
            service.update_field(id, name, value).await.unwrap();
        }
    }

    fn success(price: f64) -> std::result::Result<PredictionResult, PredictionError> {
        Ok(PredictionResult {
            predicted_price: price,
            currency: Some("IDR".to_string()),
        })
    }

    #[tokio::test]
    async fn test_new_session_is_idle_and_empty() {
        let service = service_with(GatedClient::new(success(1.0)));
        let snapshot = service.create().await;

        assert_eq!(snapshot.view.form, FormState::default());
        assert!(matches!(snapshot.view.result, ResultView::Idle { .. }));
        assert!(snapshot.view.submit.enabled);
        assert_eq!(service.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_island_update_resets_dependents_in_view() {
        let service = service_with(GatedClient::new(success(1.0)));
        let id = service.create().await.id;
        fill(&service, id).await;

        let snapshot = service.update_field(id, "island", "Sumatera").await.unwrap();
        assert_eq!(snapshot.view.form.province, "");
        assert_eq!(snapshot.view.form.city, "");
        assert!(snapshot
            .view
            .options
            .provinces
            .contains(&"Sumatera Utara".to_string()));
        assert!(snapshot.view.options.cities.is_empty());
    }

    #[tokio::test]
    async fn test_step_field_clamps() {
        let service = service_with(GatedClient::new(success(1.0)));
        let id = service.create().await.id;
        service
            .update_field(id, "jumlah_kamar_tidur", "1")
            .await
            .unwrap();

        let snapshot = service
            .step_field(id, "jumlah_kamar_tidur", -1.0)
            .await
            .unwrap();
        assert_eq!(snapshot.view.form.bedrooms, 1.0);
    }

    #[tokio::test]
    async fn test_successful_submission_shows_formatted_price() {
        let client = GatedClient::new(success(1_500_000_000.0));
        let service = service_with(Arc::clone(&client));
        let id = service.create().await.id;
        fill(&service, id).await;

        let task = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id).await }
        });
        client.started.notified().await;
        client.release.notify_one();

        let snapshot = task.await.unwrap().unwrap();
        let ResultView::Success {
            formatted_price, ..
        } = snapshot.view.result
        else {
            panic!("expected success view");
        };
        assert_eq!(formatted_price, "Rp\u{a0}1.500.000.000");
        assert!(snapshot.view.submit.enabled);
    }

    #[tokio::test]
    async fn test_failed_submission_shows_loading_then_error() {
        let client = GatedClient::new(Err(PredictionError::Server {
            status: 400,
            message: Some("invalid input".to_string()),
        }));
        let service = service_with(Arc::clone(&client));
        let id = service.create().await.id;
        fill(&service, id).await;

        let task = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id).await }
        });
        client.started.notified().await;

        let during = service.get(id).await.unwrap();
        assert!(matches!(during.view.result, ResultView::Loading { .. }));
        assert!(!during.view.submit.enabled);
        assert_eq!(during.view.submit.label, SUBMIT_LABEL_BUSY);

        client.release.notify_one();
        let after = task.await.unwrap().unwrap();
        assert_eq!(
            after.view.result,
            ResultView::Error {
                title: crate::shared::constants::ERROR_TITLE.to_string(),
                message: "invalid input".to_string(),
            }
        );
        // The form survives the failure
        assert_eq!(after.view.form.city, "Sleman");
    }

    #[tokio::test]
    async fn test_second_submission_while_outstanding_is_rejected() {
        let client = GatedClient::new(success(2_000_000.0));
        let service = service_with(Arc::clone(&client));
        let id = service.create().await.id;
        fill(&service, id).await;

        let first = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id).await }
        });
        client.started.notified().await;

        let second = service.submit(id).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        client.release.notify_one();
        assert!(first.await.unwrap().is_ok());
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_sent() {
        let client = GatedClient::new(success(1.0));
        let service = service_with(Arc::clone(&client));
        let id = service.create().await.id;

        let result = service.submit(id).await;
        assert!(matches!(result, Err(AppError::ValidationErrors(_))));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);

        let snapshot = service.get(id).await.unwrap();
        assert!(matches!(snapshot.view.result, ResultView::Idle { .. }));
    }

    #[test]
    fn test_new_submission_discards_previous_error() {
        let mut session = FormSession::new();
        for (name, value) in [
            ("pulau", "Jawa"),
            ("provinsi", "DI Yogyakarta"),
            ("kota", "Bantul"),
            ("luas_tanah", "100"),
            ("luas_bangunan", "80"),
            ("jumlah_kamar_tidur", "2"),
            ("jumlah_kamar_mandi", "1"),
        ] {
            session.update_field(name, value).unwrap();
        }

        session.begin_submission().unwrap();
        session.finish_submission(Err(PredictionError::Transport("timeout".to_string())));
        assert!(session.error.is_some());

        session.begin_submission().unwrap();
        assert!(session.error.is_none());
        assert!(session.result.is_none());
        assert!(session.is_loading());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let service = service_with(GatedClient::new(success(1.0)));
        assert!(matches!(
            service.get(Uuid::now_v7()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(Uuid::now_v7()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_abandoned_submission_can_be_resubmitted() {
        let client = GatedClient::new(success(900_000_000.0));
        let service = service_with(Arc::clone(&client));
        let id = service.create().await.id;
        fill(&service, id).await;

        let abandoned = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id).await }
        });
        client.started.notified().await;
        abandoned.abort();
        assert!(abandoned.await.unwrap_err().is_cancelled());

        let snapshot = service.get(id).await.unwrap();
        assert!(snapshot.view.submit.enabled);
        assert_eq!(
            snapshot.view.result,
            ResultView::Error {
                title: crate::shared::constants::ERROR_TITLE.to_string(),
                message: crate::shared::constants::DEFAULT_PREDICTION_ERROR.to_string(),
            }
        );

        let retry = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id).await }
        });
        client.started.notified().await;
        client.release.notify_one();

        let snapshot = retry.await.unwrap().unwrap();
        assert!(matches!(snapshot.view.result, ResultView::Success { .. }));
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_abandoned_submission_does_not_block_purge() {
        let client = GatedClient::new(success(1.0));
        let service = Arc::new(SessionService::new(
            Arc::new(LocationService::default()),
            Arc::clone(&client) as Arc<dyn PredictionClient>,
            Duration::from_secs(0),
        ));
        let id = service.create().await.id;
        fill(&service, id).await;

        let abandoned = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id).await }
        });
        client.started.notified().await;
        abandoned.abort();
        let _ = abandoned.await;

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(service.purge_expired().await, 1);
        assert_eq!(service.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_purge_expired_keeps_fresh_sessions() {
        let service = SessionService::new(
            Arc::new(LocationService::default()),
            GatedClient::new(success(1.0)),
            Duration::from_secs(0),
        );
        service.create().await;
        let fresh = SessionService::new(
            Arc::new(LocationService::default()),
            GatedClient::new(success(1.0)),
            Duration::from_secs(3600),
        );
        fresh.create().await;

        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(service.purge_expired().await, 1);
        assert_eq!(service.session_count().await, 0);
        assert_eq!(fresh.purge_expired().await, 0);
        assert_eq!(fresh.session_count().await, 1);
    }
}
