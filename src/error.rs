use thiserror::Error;

/// Errors that terminate an extraction run.
///
/// Recoverable conditions (connection failures, 401, short rate limit
/// windows) never surface here; the requester absorbs them until its attempt
/// budget runs out.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Missing credential: environment variable {var} is not set")]
    MissingCredential { var: String },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid region '{0}', expected one of AF, AS, EU, NASAOC")]
    InvalidRegion(String),

    #[error("Cannot load market lookup: {0}")]
    Lookup(String),

    #[error("Max retries ({attempts}) exceeded while requesting token: {last}")]
    TokenRequestExhausted { attempts: u32, last: String },

    #[error("Token request rejected (status {status}): {message}")]
    TokenRejected { status: u16, message: String },

    #[error("Max retries ({attempts}) exceeded while requesting {url}: {last}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        last: String,
    },

    #[error("Exceeded rate limits: retry after {retry_after} seconds")]
    RateLimitWindow { retry_after: u64 },

    #[error("Cannot decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Extraction cancelled")]
    Cancelled,
}

impl ExtractError {
    /// Returns true for configuration problems detected before any network activity.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExtractError::MissingCredential { .. }
                | ExtractError::InvalidDate(_)
                | ExtractError::InvalidRegion(_)
                | ExtractError::Lookup(_)
        )
    }
}

/// Result alias used across the crate.
pub type Res<T> = std::result::Result<T, ExtractError>;
