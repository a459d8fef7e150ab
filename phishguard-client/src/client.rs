use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use crate::verdict::{ClassificationRequest, ClassificationResponse, HealthStatus, ModelInfo};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Instant;
use tracing::{debug, info};

/// Remote verdict provider driven by the submission controller.
#[async_trait]
pub trait ClassificationService: Send + Sync {
    /// Ask for a verdict on an already normalized URL.
    async fn classify(&self, url: &str) -> Result<ClassificationResponse>;

    /// Probe the service and report whether its model is loaded.
    async fn health(&self) -> Result<HealthStatus>;
}

/// `ClassificationService` over HTTP/JSON.
///
/// Requests carry no timeout; each call runs until the service answers or
/// the connection fails.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: Client,
    config: ServiceConfig,
}

impl HttpClassifier {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("PhishGuard/", env!("CARGO_PKG_VERSION")))
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .tcp_keepalive(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| ServiceError::RequestFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// `GET {base}/model-info`.
    pub async fn model_info(&self) -> Result<ModelInfo> {
        let endpoint = self.config.model_info_url();
        debug!("Fetching model info from {}", endpoint);

        let response = Self::ensure_success(self.client.get(&endpoint).send().await?)?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ServiceError::MalformedResponse(e.to_string()))
    }

    /// Non-success statuses are failures; their bodies are not read.
    fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::RequestFailed(format!(
                "{} answered with HTTP {}",
                response.url(),
                status
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl ClassificationService for HttpClassifier {
    async fn classify(&self, url: &str) -> Result<ClassificationResponse> {
        let endpoint = self.config.predict_url();
        info!("Classifying {} via {}", url, endpoint);

        let start = Instant::now();
        let response = self
            .client
            .post(&endpoint)
            .json(&ClassificationRequest::new(url))
            .send()
            .await?;
        let response = Self::ensure_success(response)?;
        let body = response.text().await?;
        debug!("Prediction for {} took {:?}", url, start.elapsed());

        ClassificationResponse::from_json(&body)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let endpoint = self.config.health_url();
        debug!("Checking service health at {}", endpoint);

        // A service without a model answers with an error status but still
        // reports `model_loaded`, so the body is read before the status.
        let response = self.client.get(&endpoint).send().await?;
        let status = response.status();
        let body = response.text().await?;
        match serde_json::from_str::<HealthStatus>(&body) {
            Ok(health) => Ok(health),
            Err(_) if !status.is_success() => Err(ServiceError::RequestFailed(format!(
                "{} answered with HTTP {}",
                endpoint, status
            ))),
            Err(e) => Err(ServiceError::MalformedResponse(e.to_string())),
        }
    }
}
