//! In-process mock of the exchange's REST surface.
//!
//! Serves the session resource with real login/logout/validate semantics and
//! echoes every other request back as JSON, recording each one so tests can
//! inspect what went over the wire.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "secret";

/// A request as received by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Default)]
struct Inner {
    issued: u32,
    broken: bool,
    tokens: HashSet<String>,
    requests: Vec<Recorded>,
}

/// Shared handle on the mock's state.
#[derive(Debug, Clone, Default)]
pub struct MockExchange {
    inner: Arc<Mutex<Inner>>,
}

impl MockExchange {
    /// Invalidates every issued token, as if the sessions timed out.
    pub fn expire_sessions(&self) {
        self.inner.lock().unwrap().tokens.clear();
    }

    /// Makes the session check answer with a non-JSON server error.
    pub fn break_sessions(&self) {
        self.inner.lock().unwrap().broken = true;
    }

    fn broken(&self) -> bool {
        self.inner.lock().unwrap().broken
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Recorded {
        self.requests().pop().unwrap()
    }

    fn record(&self, method: Method, uri: &Uri, headers: &HeaderMap, body: &str) {
        self.inner.lock().unwrap().requests.push(Recorded {
            method,
            uri: uri.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });
    }

    fn authorized(&self, headers: &HeaderMap) -> Option<String> {
        let token = headers.get("session-token")?.to_str().ok()?.to_string();
        let inner = self.inner.lock().unwrap();
        inner.tokens.contains(&token).then_some(token)
    }

    fn router(&self) -> Router {
        Router::new()
            .route(
                "/bpapi/rest/security/session",
                post(login).get(validate).delete(logout),
            )
            .fallback(resource)
            .with_state(self.clone())
    }
}

/// Starts the mock on an ephemeral port and returns its base URL.
pub async fn spawn() -> (String, MockExchange) {
    let exchange = MockExchange::default();
    let app = exchange.router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), exchange)
}

/// Returns a base URL nothing is listening on.
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn login(
    State(exchange): State<MockExchange>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    exchange.record(method, &uri, &headers, &body);

    let creds: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    if creds["username"] != USERNAME || creds["password"] != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"errors": [{"messages": ["invalid credentials"]}]})),
        )
            .into_response();
    }

    let mut inner = exchange.inner.lock().unwrap();
    inner.issued += 1;
    let token = format!("token-{}", inner.issued);
    inner.tokens.insert(token.clone());

    Json(json!({
        "session-token": token,
        "user-id": 1,
        "role": "USER",
        "account": {"username": USERNAME, "currency": "EUR"}
    }))
    .into_response()
}

async fn validate(
    State(exchange): State<MockExchange>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    exchange.record(method, &uri, &headers, "");

    if exchange.broken() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").into_response();
    }

    match exchange.authorized(&headers) {
        Some(token) => Json(json!({"session-token": token, "user-id": 1})).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"errors": {"messages": ["session expired"]}})),
        )
            .into_response(),
    }
}

async fn logout(
    State(exchange): State<MockExchange>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    exchange.record(method, &uri, &headers, "");

    match exchange.authorized(&headers) {
        Some(token) => {
            exchange.inner.lock().unwrap().tokens.remove(&token);
            Json(json!({"session-token": token, "user-id": 1})).into_response()
        }
        None => (StatusCode::UNAUTHORIZED, "Unauthorized").into_response(),
    }
}

async fn resource(
    State(exchange): State<MockExchange>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    exchange.record(method.clone(), &uri, &headers, &body);

    match uri.path() {
        "/edge/rest/broken" => return (StatusCode::OK, "<html>gateway</html>").into_response(),
        "/edge/rest/lookups/sports" => {
            return Json(json!({"sports": [{"id": 15, "name": "Soccer"}]})).into_response()
        }
        _ => {}
    }

    if exchange.authorized(&headers).is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"errors": [{"messages": ["You are not logged in."]}]})),
        )
            .into_response();
    }

    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "body": body,
    }))
    .into_response()
}
