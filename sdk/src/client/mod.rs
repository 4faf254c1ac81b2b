//! HTTP client for the Matchbook REST API.
//!
//! This module provides the authenticated client, the transport it sends
//! requests through and the normalization of every response into an
//! [`ApiResult`].
//!
//! # Example
//!
//! ```rust,ignore
//! use matchbook_sdk::client::{ApiResult, ClientConfig, MatchbookClient};
//! use matchbook_sdk::types::SportsQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MatchbookClient::new(ClientConfig::from_env())?;
//!
//!     match client.login().await? {
//!         ApiResult::Success(_) => println!("logged in"),
//!         ApiResult::Failure { status, messages } => {
//!             println!("login rejected ({}): {:?}", status, messages);
//!             return Ok(());
//!         }
//!     }
//!
//!     let sports = client.get_sports(&SportsQuery::default()).await?.into_result()?;
//!     println!("{}", sports["sports"]);
//!
//!     client.logout().await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod response;

pub use auth::{AuthState, MatchbookClient, SESSION_PATH, SESSION_TOKEN_HEADER};
pub use config::{ClientConfig, Credentials};
pub use error::ClientError;
pub use http::HttpSession;
pub use response::{normalize, ApiResult};
