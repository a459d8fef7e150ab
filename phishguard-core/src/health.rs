// Startup probe of the classification service

use phishguard_client::ClassificationService;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthOutcome {
    Ready,
    ModelNotLoaded,
    Unreachable(String),
}

impl HealthOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, HealthOutcome::Ready)
    }
}

/// Probe the service once and log what was found. Never fails.
pub async fn check_health<S>(service: &S) -> HealthOutcome
where
    S: ClassificationService + ?Sized,
{
    match service.health().await {
        Ok(status) if status.model_loaded => {
            info!(
                "Classification service is {}",
                status.status.as_deref().unwrap_or("up")
            );
            HealthOutcome::Ready
        }
        Ok(_) => {
            warn!("ML model is not loaded. Please train the model first.");
            HealthOutcome::ModelNotLoaded
        }
        Err(e) => {
            warn!("Could not connect to the classification service: {}", e);
            warn!("Make sure the backend server is running");
            HealthOutcome::Unreachable(e.to_string())
        }
    }
}

/// Run `check_health` as a detached background task.
///
/// The handle may be dropped; the probe still runs and logs.
pub fn spawn_health_check<S>(service: Arc<S>) -> JoinHandle<HealthOutcome>
where
    S: ClassificationService + ?Sized + 'static,
{
    tokio::spawn(async move { check_health(service.as_ref()).await })
}
