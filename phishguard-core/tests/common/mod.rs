#![allow(dead_code)]

use async_trait::async_trait;
use phishguard_client::{
    ClassificationResponse, ClassificationService, HealthStatus, Prediction, ServiceError,
};
use phishguard_core::{ResultDisplay, SubmissionView};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Service double answering from a canned outcome and counting calls.
pub struct StubService {
    outcome: Mutex<Option<Result<ClassificationResponse, ServiceError>>>,
    health: Option<HealthStatus>,
    pub classify_calls: AtomicUsize,
    pub last_url: Mutex<Option<String>>,
}

impl StubService {
    pub fn answering(response: ClassificationResponse) -> Self {
        Self::with_outcome(Ok(response))
    }

    pub fn failing(err: ServiceError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<ClassificationResponse, ServiceError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            health: None,
            classify_calls: AtomicUsize::new(0),
            last_url: Mutex::new(None),
        }
    }

    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = Some(health);
        self
    }

    pub fn calls(&self) -> usize {
        self.classify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassificationService for StubService {
    async fn classify(&self, url: &str) -> Result<ClassificationResponse, ServiceError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        self.outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ServiceError::RequestFailed("stub exhausted".into())))
    }

    async fn health(&self) -> Result<HealthStatus, ServiceError> {
        self.health
            .clone()
            .ok_or_else(|| ServiceError::RequestFailed("connection refused".into()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    SetInput(String),
    ShowLoading(String),
    HideLoading,
    ShowResult(ResultDisplay),
    ShowError(String),
    Reset,
}

/// View double recording every call in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub input: String,
    pub loading: bool,
    pub form_visible: bool,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            form_visible: true,
            ..Self::default()
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::ShowError(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_result(&self) -> Option<&ResultDisplay> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::ShowResult(r) => Some(r),
            _ => None,
        })
    }
}

impl SubmissionView for RecordingView {
    fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.calls.push(ViewCall::SetInput(value.to_string()));
    }

    fn show_loading(&mut self, url: &str) {
        self.loading = true;
        self.form_visible = false;
        self.calls.push(ViewCall::ShowLoading(url.to_string()));
    }

    fn hide_loading(&mut self) {
        self.loading = false;
        self.calls.push(ViewCall::HideLoading);
    }

    fn show_result(&mut self, result: &ResultDisplay) {
        self.calls.push(ViewCall::ShowResult(result.clone()));
    }

    fn show_error(&mut self, message: &str) {
        self.form_visible = true;
        self.calls.push(ViewCall::ShowError(message.to_string()));
    }

    fn reset(&mut self) {
        self.input.clear();
        self.loading = false;
        self.form_visible = true;
        self.calls.push(ViewCall::Reset);
    }
}

pub fn response(prediction: &str, confidence: f64, risk_level: &str, message: &str) -> ClassificationResponse {
    ClassificationResponse {
        prediction: Prediction::from(prediction.to_string()),
        confidence,
        risk_level: risk_level.to_string(),
        message: message.to_string(),
    }
}
