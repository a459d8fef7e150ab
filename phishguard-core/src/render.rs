use phishguard_client::ClassificationResponse;
use serde::Serialize;

pub const PHISHING_TITLE: &str = "Warning: Phishing Detected!";
pub const SAFE_TITLE: &str = "Safe Website";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Danger,
    Safe,
}

/// Everything a view needs to draw a verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultDisplay {
    pub url: String,
    pub variant: Variant,
    pub title: &'static str,
    pub message: String,
    /// e.g. `"95.7%"`
    pub confidence: String,
    /// Capitalized label, e.g. `"High"`
    pub risk_label: String,
    /// Label as sent by the service, used for badge styling.
    pub risk_level: String,
}

impl ResultDisplay {
    pub fn new(url: &str, response: &ClassificationResponse) -> Self {
        let variant = if response.prediction.is_phishing() {
            Variant::Danger
        } else {
            Variant::Safe
        };
        let title = match variant {
            Variant::Danger => PHISHING_TITLE,
            Variant::Safe => SAFE_TITLE,
        };

        Self {
            url: url.to_string(),
            variant,
            title,
            message: response.message.clone(),
            confidence: format_confidence(response.confidence),
            risk_label: capitalize(&response.risk_level),
            risk_level: response.risk_level.clone(),
        }
    }

    pub fn is_phishing(&self) -> bool {
        self.variant == Variant::Danger
    }
}

/// `confidence * 100` with one decimal place and a percent sign.
///
/// Halves round away from zero, so `0.5625` reads `56.3%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", (confidence * 1000.0).round() / 10.0)
}

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
