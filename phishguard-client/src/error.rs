use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Transport failure or a non-success HTTP status.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The body did not match the expected contract.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid service URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::MalformedResponse(err.to_string())
        } else {
            ServiceError::RequestFailed(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
