use crate::error::SubmissionError;
use crate::render::ResultDisplay;
use crate::state::SubmissionState;
use crate::validate::normalize_and_validate;
use crate::view::SubmissionView;
use phishguard_client::{ClassificationResponse, ClassificationService, ServiceError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns the submission state and drives a view through
/// `Idle -> Loading -> ResultShown | ErrorShown -> Idle`.
///
/// `submit` runs a whole submission. Event-loop front ends that cannot hold
/// the controller across an await call `begin`, run
/// `ClassificationService::classify` on their own task, then hand the
/// outcome to `finish`. Overlapping submissions are not coordinated; the
/// last outcome to arrive is the one shown.
pub struct SubmissionController<S: ?Sized, V> {
    service: Arc<S>,
    view: V,
    state: SubmissionState,
    input: String,
}

impl<S, V> SubmissionController<S, V>
where
    S: ClassificationService + ?Sized,
    V: SubmissionView,
{
    pub fn new(service: Arc<S>, view: V) -> Self {
        Self {
            service,
            view,
            state: SubmissionState::Idle,
            input: String::new(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Input value as last pushed to the view.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn service(&self) -> Arc<S> {
        Arc::clone(&self.service)
    }

    /// Validate and classify `input`, rendering the verdict or the failure.
    pub async fn submit(&mut self, input: &str) -> Result<ResultDisplay, SubmissionError> {
        let url = self.begin(input)?;
        let outcome = self.service.classify(&url).await;
        self.finish(&url, outcome)
    }

    /// Validate `input` and enter `Loading`.
    ///
    /// On success the view shows the normalized URL and the loading
    /// indicator, and the URL to classify is returned. Invalid input goes
    /// straight to `ErrorShown` without touching the network.
    pub fn begin(&mut self, input: &str) -> Result<String, SubmissionError> {
        self.input = input.to_string();

        let url = match normalize_and_validate(input) {
            Ok(url) => url,
            Err(e) => {
                let err = SubmissionError::from(e);
                self.handle_failure(&err);
                return Err(err);
            }
        };

        self.input = url.clone();
        self.view.set_input(&url);

        self.transition(SubmissionState::Loading);
        self.view.show_loading(&url);
        Ok(url)
    }

    /// Apply the outcome of a classification started with `begin`.
    pub fn finish(
        &mut self,
        url: &str,
        outcome: Result<ClassificationResponse, ServiceError>,
    ) -> Result<ResultDisplay, SubmissionError> {
        match outcome {
            Ok(response) => Ok(self.render(url, &response)),
            Err(e) => {
                let err = SubmissionError::from(e);
                self.handle_failure(&err);
                Err(err)
            }
        }
    }

    pub fn render(&mut self, url: &str, response: &ClassificationResponse) -> ResultDisplay {
        let result = ResultDisplay::new(url, response);
        info!(
            "{} classified as {} ({} confidence, risk {})",
            url, response.prediction, result.confidence, result.risk_level
        );

        self.view.hide_loading();
        self.view.show_result(&result);
        self.transition(SubmissionState::ResultShown);
        result
    }

    /// Back to an empty form, whatever was showing.
    pub fn reset(&mut self) {
        self.input.clear();
        self.view.reset();
        self.transition(SubmissionState::Idle);
    }

    pub fn handle_failure(&mut self, err: &SubmissionError) {
        if err.is_validation() {
            debug!("Rejected input '{}': {}", self.input, err);
        } else {
            warn!("Classification of '{}' failed: {}", self.input, err);
        }

        self.transition(SubmissionState::ErrorShown);
        if err.is_validation() {
            self.view.show_rejected(self.input.trim(), err.user_message());
        } else {
            self.view.show_error(err.user_message());
        }
        self.view.hide_loading();
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!("Submission state {} -> {}", self.state, next);
        self.state = next;
    }
}
