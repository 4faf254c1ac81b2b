//! Client configuration.
//!
//! Provides configuration options for the HTTP client, including the
//! credentials used at login.

use std::env;
use std::fmt;
use std::time::Duration;

use super::error::ClientError;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "https://api.matchbook.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the default username.
pub const USERNAME_ENV: &str = "MATCHBOOK_USERNAME";

/// Environment variable holding the default password.
pub const PASSWORD_ENV: &str = "MATCHBOOK_PASSWORD";

/// Username and password for the exchange account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates a credentials pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// Account username.
    pub username: Option<String>,

    /// Account password.
    pub password: Option<String>,

    /// Emit a debug event for every request and response.
    pub log_requests: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("matchbook-sdk/{}", env!("CARGO_PKG_VERSION")),
            username: None,
            password: None,
            log_requests: true,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("log_requests", &self.log_requests)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Creates a default configuration with credentials read from
    /// `MATCHBOOK_USERNAME` and `MATCHBOOK_PASSWORD`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_credentials()
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the username and password.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Fills whichever of username and password is unset from the
    /// environment. Explicit values are kept.
    #[must_use]
    pub fn with_env_credentials(self) -> Self {
        self.with_credentials_from(|key| env::var(key).ok())
    }

    /// Fills unset credentials from an arbitrary lookup keyed by
    /// [`USERNAME_ENV`] and [`PASSWORD_ENV`].
    #[must_use]
    pub fn with_credentials_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.username.is_none() {
            self.username = lookup(USERNAME_ENV).filter(|v| !v.is_empty());
        }
        if self.password.is_none() {
            self.password = lookup(PASSWORD_ENV).filter(|v| !v.is_empty());
        }
        self
    }

    /// Enables or disables per-request debug events.
    #[must_use]
    pub fn with_log_requests(mut self, log_requests: bool) -> Self {
        self.log_requests = log_requests;
        self
    }

    /// Returns the credentials used at login.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingCredentials` if either value is unset.
    pub fn credentials(&self) -> Result<Credentials, ClientError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
            _ => Err(ClientError::MissingCredentials),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
