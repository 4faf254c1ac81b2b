//! Authenticated API client.
//!
//! [`MatchbookClient`] owns the credentials and the session state machine.
//! It starts logged out, moves to logged in when a login succeeds, and goes
//! back to logged out on a successful logout or when the exchange rejects
//! the current token with a 401.
//!
//! Clones share one session. Login and logout are serialized; resource calls
//! read the token without waiting on each other.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::config::ClientConfig;
use super::error::ClientError;
use super::http::{headers_from, HttpSession};
use super::response::ApiResult;
use crate::types::{LoginRequest, LoginResponse};

/// Session resource: POST logs in, DELETE logs out, GET validates.
pub const SESSION_PATH: &str = "/bpapi/rest/security/session";

/// Header carrying the session token on authenticated requests.
pub const SESSION_TOKEN_HEADER: &str = "session-token";

const LOGIN_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Whether the client currently holds a session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    /// No token held.
    #[default]
    LoggedOut,
    /// A token issued by the last successful login is held.
    LoggedIn,
}

/// Token and user id exist only while logged in.
#[derive(Clone, Default, PartialEq, Eq)]
enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn {
        token: String,
        user_id: Option<i64>,
    },
}

impl SessionState {
    fn auth_state(&self) -> AuthState {
        match self {
            Self::LoggedOut => AuthState::LoggedOut,
            Self::LoggedIn { .. } => AuthState::LoggedIn,
        }
    }

    fn token(&self) -> Option<&str> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn { token, .. } => Some(token),
        }
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => f.write_str("LoggedOut"),
            Self::LoggedIn { user_id, .. } => f
                .debug_struct("LoggedIn")
                .field("token", &"<redacted>")
                .field("user_id", user_id)
                .finish(),
        }
    }
}

/// Request shape used by resource operations.
pub(crate) enum Verb<'a> {
    Get,
    Post(&'a Value),
    Put(&'a Value),
    Delete,
}

/// Client for the Matchbook REST API.
#[derive(Debug, Clone)]
pub struct MatchbookClient {
    config: ClientConfig,
    http: HttpSession,
    state: Arc<RwLock<SessionState>>,
    transition: Arc<Mutex<()>>,
}

impl MatchbookClient {
    /// Creates a new logged-out client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = HttpSession::new(&config)?;

        Ok(Self {
            config,
            http,
            state: Arc::new(RwLock::new(SessionState::LoggedOut)),
            transition: Arc::new(Mutex::new(())),
        })
    }

    /// Creates a new client with default configuration and credentials
    /// taken from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    /// Creates a new client with the given base URL and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_credentials(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url).with_credentials(username, password))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying HTTP session.
    #[must_use]
    pub fn http(&self) -> &HttpSession {
        &self.http
    }

    /// Returns the current authentication state.
    pub async fn auth_state(&self) -> AuthState {
        self.state.read().await.auth_state()
    }

    /// Returns true if a session token is held.
    pub async fn is_logged_in(&self) -> bool {
        self.auth_state().await == AuthState::LoggedIn
    }

    /// Returns the current session token.
    pub async fn session_token(&self) -> Option<String> {
        self.state.read().await.token().map(str::to_string)
    }

    /// Returns the user id reported at login.
    pub async fn user_id(&self) -> Option<i64> {
        match &*self.state.read().await {
            SessionState::LoggedIn { user_id, .. } => *user_id,
            SessionState::LoggedOut => None,
        }
    }

    /// Logs in with the configured credentials.
    ///
    /// On success the returned payload is the exchange's session document
    /// and the client is logged in. On failure the state is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingCredentials` when no username or
    /// password is configured, or a transport error. A successful response
    /// without a `session-token` field is a deserialization error.
    pub async fn login(&self) -> Result<ApiResult, ClientError> {
        let credentials = self.config.credentials()?;
        let body = serde_json::to_value(LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        })
        .map_err(|e| ClientError::Serialization(e.to_string()))?;
        let headers = headers_from([("content-type", LOGIN_CONTENT_TYPE), ("accept", "*/*")])?;

        let _transition = self.transition.lock().await;
        let result = self.http.post(SESSION_PATH, &body, &headers).await?;

        match &result {
            ApiResult::Success(payload) => {
                let login: LoginResponse = serde_json::from_value(payload.clone())
                    .map_err(|e| ClientError::Deserialization(e.to_string()))?;
                info!("Logged in as user {:?}", login.user_id);
                *self.state.write().await = SessionState::LoggedIn {
                    token: login.session_token,
                    user_id: login.user_id,
                };
            }
            ApiResult::Failure { status, messages } => {
                warn!("Login rejected with status {}: {:?}", status, messages);
            }
        }

        Ok(result)
    }

    /// Ends the current session.
    ///
    /// On success the token is dropped. On failure nothing changes. Calling
    /// this while logged out sends the request without a token and returns
    /// whatever the exchange answers.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request cannot be sent.
    pub async fn logout(&self) -> Result<ApiResult, ClientError> {
        let _transition = self.transition.lock().await;
        let token = self.session_token().await;
        let headers = token_headers(token.as_deref())?;

        let result = self.http.delete(SESSION_PATH, &headers).await?;

        match &result {
            ApiResult::Success(_) => {
                *self.state.write().await = SessionState::LoggedOut;
                info!("Logged out");
            }
            ApiResult::Failure { status, .. } => {
                warn!("Logout rejected with status {}", status);
            }
        }

        Ok(result)
    }

    /// Checks whether the exchange still accepts the current session.
    ///
    /// Returns `false` for any failure response, including an expired or
    /// missing session. A 401 also drops the held token.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request cannot be sent.
    pub async fn validate_session(&self) -> Result<bool, ClientError> {
        let result = self.call(Verb::Get, SESSION_PATH).await?;
        Ok(result.is_success())
    }

    /// Sends a request with the current token attached.
    ///
    /// A 401 answer clears the session, unless a newer login replaced the
    /// token this request was sent with.
    pub(crate) async fn call(&self, verb: Verb<'_>, path: &str) -> Result<ApiResult, ClientError> {
        let token = self.session_token().await;
        let headers = token_headers(token.as_deref())?;

        let result = match verb {
            Verb::Get => self.http.get(path, &headers).await?,
            Verb::Post(body) => self.http.post(path, body, &headers).await?,
            Verb::Put(body) => self.http.put(path, body, &headers).await?,
            Verb::Delete => self.http.delete(path, &headers).await?,
        };

        if result.is_unauthorized() {
            if let Some(token) = token {
                self.invalidate(&token).await;
            }
        }

        Ok(result)
    }

    async fn invalidate(&self, rejected: &str) {
        let mut state = self.state.write().await;
        if state.token() == Some(rejected) {
            *state = SessionState::LoggedOut;
            warn!("Session token rejected by the exchange, logged out");
        } else {
            debug!("Ignoring 401 for a token that is no longer current");
        }
    }
}

fn token_headers(token: Option<&str>) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let value =
            HeaderValue::from_str(token).map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        headers.insert(SESSION_TOKEN_HEADER, value);
    }
    Ok(headers)
}
