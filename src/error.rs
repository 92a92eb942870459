use thiserror::Error;

/// Failures surfaced by the data-acquisition core.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Caller violated a precondition. Never retried.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transient connectivity failure (connect error, timeout, broken stream).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status. 5xx is retryable, 4xx is a client error.
    #[error("request failed with HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The API answered 200 but the payload carried an error message.
    #[error("api error: {0}")]
    Api(String),

    /// Response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// No data could be obtained for the pair after retries were exhausted.
    #[error("no data available for {entity}/{indicator}")]
    DataUnavailable { entity: String, indicator: String },
}

impl FetchError {
    /// Whether a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Http { status, .. } => *status >= 500,
            FetchError::InvalidRequest(_)
            | FetchError::Api(_)
            | FetchError::Decode(_)
            | FetchError::DataUnavailable { .. } => false,
        }
    }

    /// Whether a stale cache entry may stand in for this failure.
    /// Programming errors must always reach the caller.
    pub fn allows_stale_fallback(&self) -> bool {
        !matches!(self, FetchError::InvalidRequest(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
