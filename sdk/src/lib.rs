//! Matchbook SDK - Rust client library for the Matchbook betting exchange.
//!
//! The crate wraps the exchange's REST API behind a single authenticated
//! client. Every request returns an [`ApiResult`]: either the decoded JSON
//! payload of a 200 response or the status and error messages of any other
//! response. Only failures to reach the exchange, or a success body that is
//! not JSON, surface as [`ClientError`].
//!
//! # Modules
//!
//! - [`params`] — Encodes named arguments into query strings and JSON bodies
//! - [`client`] — Session lifecycle, transport and response normalization
//! - [`types`] — Parameter enumerations, query structs and request bodies
//!
//! # Logging
//!
//! Requests, responses and session transitions are reported through
//! [`tracing`]. The crate never installs a subscriber; the application
//! decides where events go.
//!
//! # Example
//!
//! ```rust
//! use matchbook_sdk::params::RequestParams;
//! use matchbook_sdk::types::{OddsType, SportsQuery, QueryParams};
//!
//! let params = RequestParams::new()
//!     .with("odds_type", OddsType::Decimal)
//!     .with("include_prices", true);
//! assert_eq!(params.encode(), "odds-type=DECIMAL&include-prices=true");
//!
//! assert_eq!(SportsQuery::default().to_params().encode(), "");
//! ```

pub mod client;
pub mod params;
pub mod types;

pub use client::{ApiResult, AuthState, ClientConfig, ClientError, MatchbookClient};
pub use params::{ParamValue, RequestParams};
