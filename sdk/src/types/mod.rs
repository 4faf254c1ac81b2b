//! Typed values exchanged with the Matchbook REST API.
//!
//! Resource payloads are returned as raw JSON; this module only types what
//! the client itself builds or reads: enumerated parameter values, the
//! per-operation query parameters, offer bodies and the login payload.

pub mod enums;
pub mod offer;
pub mod query;
pub mod session;

pub use enums::{
    Currency, ExchangeType, MarketState, OddsType, OfferStatus, PriceMode, Side, SortOrder,
    SportStatus,
};
pub use offer::{EditOffers, OfferEdit, OfferRequest, SubmitOffers};
pub use query::{
    BetsQuery, EventsQuery, MarketsQuery, OffersQuery, PageQuery, PositionsQuery, PriceOptions,
    PricesQuery, QueryParams, RunnersQuery, SportsQuery, TransactionsQuery,
};
pub use session::{LoginRequest, LoginResponse};
