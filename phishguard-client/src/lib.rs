pub mod client;
pub mod config;
pub mod error;
pub mod verdict;

pub use client::{ClassificationService, HttpClassifier};
pub use config::{DEFAULT_BASE_URL, ServiceConfig};
pub use error::ServiceError;
pub use verdict::{ClassificationRequest, ClassificationResponse, HealthStatus, ModelInfo, Prediction};
