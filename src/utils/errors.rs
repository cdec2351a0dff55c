use thiserror::Error;

/// Errors surfaced by the Spotify client and the track pipeline.
///
/// Nothing in the pipeline recovers from these; they propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Spotify answered with a non-2xx status
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("No access token configured")]
    MissingToken,

    #[error("Access token expired")]
    TokenExpired,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
