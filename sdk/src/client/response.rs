//! Response normalization.
//!
//! Every response from the exchange passes through [`normalize`], the only
//! place status codes are interpreted. A 200 becomes
//! [`ApiResult::Success`] carrying the decoded JSON; anything else becomes
//! [`ApiResult::Failure`] with whatever messages could be read from the body.

use serde_json::Value;

use super::error::ClientError;

/// The only status treated as success.
pub const SUCCESS_STATUS: u16 = 200;

/// Status the exchange uses for a missing or expired session.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Outcome of a request that reached the exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    /// Status 200 with its decoded JSON body.
    Success(Value),

    /// Any other status.
    Failure {
        /// HTTP status code.
        status: u16,
        /// Messages read from the error body; empty when none could be read.
        messages: Vec<String>,
    },
}

impl ApiResult {
    /// Returns true for [`ApiResult::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for [`ApiResult::Failure`].
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns true when the exchange rejected the session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Failure { status, .. } if *status == UNAUTHORIZED_STATUS)
    }

    /// Returns the HTTP status the result was built from.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Success(_) => SUCCESS_STATUS,
            Self::Failure { status, .. } => *status,
        }
    }

    /// Returns the success payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure messages; empty for a success.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Success(_) => &[],
            Self::Failure { messages, .. } => messages,
        }
    }

    /// Converts into a `Result`, mapping a failure to [`ClientError::Api`].
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for [`ApiResult::Failure`].
    pub fn into_result(self) -> Result<Value, ClientError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure { status, messages } => Err(ClientError::Api { status, messages }),
        }
    }
}

/// Converts a completed response into an [`ApiResult`].
///
/// A malformed error body never fails: it yields a `Failure` with no
/// messages.
///
/// # Errors
///
/// Returns `ClientError::Deserialization` when a 200 response body is not
/// valid JSON.
pub fn normalize(status: u16, body: &str) -> Result<ApiResult, ClientError> {
    if status == SUCCESS_STATUS {
        let payload = serde_json::from_str(body)
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;
        return Ok(ApiResult::Success(payload));
    }

    let messages = serde_json::from_str::<Value>(body)
        .map(|value| extract_messages(&value))
        .unwrap_or_default();

    Ok(ApiResult::Failure { status, messages })
}

/// Reads error messages from an error body.
///
/// The exchange has used two shapes for `errors`: a single object
/// (`{"errors": {"messages": [...]}}`) and an array of objects
/// (`{"errors": [{"messages": [...]}, ...]}`). Both are accepted, and
/// `messages` may be a list or a single string.
#[must_use]
pub fn extract_messages(body: &Value) -> Vec<String> {
    match body.get("errors") {
        Some(Value::Array(errors)) => errors.iter().flat_map(messages_of).collect(),
        Some(error @ Value::Object(_)) => messages_of(error),
        _ => Vec::new(),
    }
}

fn messages_of(error: &Value) -> Vec<String> {
    match error.get("messages") {
        Some(Value::Array(messages)) => messages
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(message)) => vec![message.clone()],
        _ => Vec::new(),
    }
}
