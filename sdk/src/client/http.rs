//! HTTP transport.
//!
//! [`HttpSession`] owns the connection pool, the base URL and the default
//! header set. It sends one request per call, never retries, and hands the
//! raw response to [`normalize`]. It holds no authentication state: callers
//! attach the session token through the per-call headers.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE, USER_AGENT,
};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use super::config::ClientConfig;
use super::error::ClientError;
use super::response::{normalize, ApiResult};

/// Content type sent with JSON bodies unless the caller overrides it.
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP session against the Matchbook REST API.
#[derive(Debug, Clone)]
pub struct HttpSession {
    base_url: String,
    default_headers: HeaderMap,
    http: reqwest::Client,
    log_requests: bool,
}

impl HttpSession {
    /// Creates a new session with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| ClientError::InvalidHeader(e.to_string()))?,
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_headers,
            http,
            log_requests: config.log_requests,
        })
    }

    /// Returns the base URL every path is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers sent on every request.
    #[must_use]
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Resolves a path against the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Makes a GET request to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or a 200 response is
    /// not valid JSON.
    pub async fn get(&self, path: &str, headers: &HeaderMap) -> Result<ApiResult, ClientError> {
        self.execute(Method::GET, path, None, headers).await
    }

    /// Makes a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or a 200 response is
    /// not valid JSON.
    pub async fn post(
        &self,
        path: &str,
        body: &Value,
        headers: &HeaderMap,
    ) -> Result<ApiResult, ClientError> {
        self.execute(Method::POST, path, Some(body), headers).await
    }

    /// Makes a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or a 200 response is
    /// not valid JSON.
    pub async fn put(
        &self,
        path: &str,
        body: &Value,
        headers: &HeaderMap,
    ) -> Result<ApiResult, ClientError> {
        self.execute(Method::PUT, path, Some(body), headers).await
    }

    /// Makes a DELETE request to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or a 200 response is
    /// not valid JSON.
    pub async fn delete(&self, path: &str, headers: &HeaderMap) -> Result<ApiResult, ClientError> {
        self.execute(Method::DELETE, path, None, headers).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: &HeaderMap,
    ) -> Result<ApiResult, ClientError> {
        let url = self.url(path);

        let mut merged = self.default_headers.clone();
        if body.is_some() {
            merged.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        let merged = merge_headers(merged, headers);

        if self.log_requests {
            debug!("{} {}", method, url);
        }

        let mut request = self.http.request(method.clone(), &url).headers(merged);
        if let Some(body) = body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| ClientError::Serialization(e.to_string()))?;
            request = request.body(bytes);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if self.log_requests {
            debug!("{} {} -> {} ({} bytes)", method, url, status, text.len());
        }

        normalize(status, &text)
    }
}

/// Merges `overrides` over `defaults`. A header name present in `overrides`
/// replaces every default value for that name.
#[must_use]
pub fn merge_headers(mut defaults: HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    for name in overrides.keys() {
        defaults.remove(name);
    }
    for (name, value) in overrides {
        defaults.append(name.clone(), value.clone());
    }
    defaults
}

/// Builds a header map from string pairs.
///
/// # Errors
///
/// Returns `ClientError::InvalidHeader` if a name or value is not a valid
/// HTTP header.
pub fn headers_from<'a, I>(pairs: I) -> Result<HeaderMap, ClientError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(base_url: &str) -> HttpSession {
        HttpSession::new(&ClientConfig::new(base_url)).unwrap()
    }

    #[test]
    fn test_session_new() {
        let session = HttpSession::new(&ClientConfig::default());
        assert!(session.is_ok());
    }

    #[test]
    fn test_session_invalid_config() {
        let session = HttpSession::new(&ClientConfig::new(""));
        assert!(session.is_err());
    }

    #[test]
    fn test_session_invalid_user_agent() {
        let config = ClientConfig::default().with_user_agent("bad\nagent");
        let err = HttpSession::new(&config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }

    #[test]
    fn test_url_joins_single_slash() {
        let session = session("https://api.matchbook.com/");
        assert_eq!(
            session.url("/bpapi/rest/security/session"),
            "https://api.matchbook.com/bpapi/rest/security/session"
        );
        assert_eq!(
            session.url("edge/rest/account"),
            "https://api.matchbook.com/edge/rest/account"
        );
    }

    #[test]
    fn test_default_headers() {
        let session = session("https://api.matchbook.com");
        let headers = session.default_headers();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[ACCEPT_ENCODING], "gzip");
        assert!(headers[USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("matchbook-sdk/"));
    }

    #[test]
    fn test_merge_headers_caller_wins() {
        let session = session("https://api.matchbook.com");
        let pairs = [("Accept", "*/*"), ("session-token", "abc")];
        let overrides = headers_from(pairs).unwrap();

        let merged = merge_headers(session.default_headers().clone(), &overrides);
        assert_eq!(merged[ACCEPT], "*/*");
        assert_eq!(merged.get_all(ACCEPT).iter().count(), 1);
        assert_eq!(merged["session-token"], "abc");
        assert_eq!(merged[ACCEPT_ENCODING], "gzip");
    }

    #[test]
    fn test_headers_from_rejects_bad_name() {
        let err = headers_from([("bad header", "x")]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }
}
