use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// Body of `POST {base}/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub url: String,
}

impl ClassificationRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Verdict label reported by the service.
///
/// Only `phishing` is the phishing verdict. The reference backend answers
/// `legitimate` for safe URLs; unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Prediction {
    Phishing,
    Safe,
    Legitimate,
    Other(String),
}

impl Prediction {
    pub fn is_phishing(&self) -> bool {
        matches!(self, Prediction::Phishing)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Prediction::Phishing => "phishing",
            Prediction::Safe => "safe",
            Prediction::Legitimate => "legitimate",
            Prediction::Other(label) => label,
        }
    }
}

impl From<String> for Prediction {
    fn from(label: String) -> Self {
        match label.as_str() {
            "phishing" => Prediction::Phishing,
            "safe" => Prediction::Safe,
            "legitimate" => Prediction::Legitimate,
            _ => Prediction::Other(label),
        }
    }
}

impl From<Prediction> for String {
    fn from(prediction: Prediction) -> Self {
        prediction.as_str().to_string()
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful answer of `POST {base}/predict`. Extra fields such as `url`
/// and `result` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub prediction: Prediction,
    pub confidence: f64,
    pub risk_level: String,
    pub message: String,
}

impl ClassificationResponse {
    /// Decode a response body, rejecting confidences outside `[0, 1]`.
    pub fn from_json(body: &str) -> Result<Self> {
        let response: Self = serde_json::from_str(body)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
        response.validate()?;
        Ok(response)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ServiceError::MalformedResponse(format!(
                "confidence {} is outside [0, 1]",
                self.confidence
            )));
        }
        Ok(())
    }
}

/// Answer of `GET {base}/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Answer of `GET {base}/model-info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub num_features: usize,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
}
