//! Error types for Twist API calls

use thiserror::Error;

/// Failures raised by the Twist request gateway
#[derive(Error, Debug)]
pub enum TwistError {
    /// Only GET and POST are used by the Twist v3 API
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Tool arguments could not be turned into request parameters
    #[error("invalid request parameters: {0}")]
    Params(String),

    /// The API answered with a non-2xx status
    #[error("HTTP {status} from {url}: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Request URL
        url: String,
        /// Response body, as sent by the API
        body: String,
    },

    /// DNS, connection, TLS or timeout failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for Twist API operations
pub type TwistResult<T> = Result<T, TwistError>;
