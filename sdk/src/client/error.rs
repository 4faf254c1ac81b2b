//! Client error types.
//!
//! [`ClientError`] covers failures the library cannot recover from: the
//! network call itself failed, or a response that should have carried a JSON
//! payload did not. Non-200 answers from the exchange are not errors here;
//! they come back as [`ApiResult::Failure`](super::response::ApiResult).

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Failed to deserialize a success response.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// Failed to serialize a request body.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A header name or value could not be encoded.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Username or password missing at login.
    #[error("missing credentials: username and password are required to log in")]
    MissingCredentials,

    /// The exchange answered with a non-200 status.
    ///
    /// Only produced by [`ApiResult::into_result`](super::response::ApiResult::into_result).
    #[error("API error [{status}]: {}", .messages.join("; "))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Messages extracted from the error body.
        messages: Vec<String>,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_api_display() {
        let err = ClientError::Api {
            status: 400,
            messages: vec!["odds out of range".to_string(), "stake too low".to_string()],
        };
        assert_eq!(err.to_string(), "API error [400]: odds out of range; stake too low");
    }

    #[test]
    fn test_client_error_missing_credentials() {
        let err = ClientError::MissingCredentials;
        assert!(err.to_string().starts_with("missing credentials"));
    }

    #[test]
    fn test_client_error_timeout() {
        let err = ClientError::Timeout;
        assert_eq!(err.to_string(), "request timeout");
    }

    #[test]
    fn test_client_error_deserialization() {
        let err = ClientError::Deserialization("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "deserialization failed: expected value at line 1"
        );
    }
}
