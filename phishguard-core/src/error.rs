use phishguard_client::ServiceError;
use thiserror::Error;

/// Input rejected before any network call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL cannot be parsed even after adding a scheme")]
    MalformedUrl,
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl SubmissionError {
    /// Text shown to the user. Service failures all read the same.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::Validation(ValidationError::Empty) => "Please enter a URL",
            SubmissionError::Validation(ValidationError::MalformedUrl) => {
                "Please enter a valid URL (e.g., https://example.com)"
            }
            SubmissionError::Service(_) => {
                "An error occurred while analyzing the URL. Please try again."
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SubmissionError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_share_one_notice() {
        let failed = SubmissionError::from(ServiceError::RequestFailed("HTTP 500".into()));
        let malformed = SubmissionError::from(ServiceError::MalformedResponse("missing field".into()));
        assert_eq!(failed.user_message(), malformed.user_message());
        assert!(failed.user_message().contains("Please try again"));
    }

    #[test]
    fn test_validation_notices() {
        assert_eq!(
            SubmissionError::from(ValidationError::Empty).user_message(),
            "Please enter a URL"
        );
        assert!(
            SubmissionError::from(ValidationError::MalformedUrl)
                .user_message()
                .starts_with("Please enter a valid URL")
        );
    }
}
