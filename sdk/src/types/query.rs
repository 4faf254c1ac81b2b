//! Per-operation query parameters.
//!
//! Every resource operation declares the parameters it accepts as a plain
//! struct. Unset fields are left out of the encoded query entirely.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::enums::{
    Currency, ExchangeType, MarketState, OddsType, OfferStatus, PriceMode, Side, SortOrder,
    SportStatus,
};
use crate::params::RequestParams;

/// Types that can be turned into [`RequestParams`].
pub trait QueryParams {
    /// Builds the parameter set for one request.
    fn to_params(&self) -> RequestParams;
}

/// Adds a comma-joined id list when it is not empty.
fn with_ids(params: RequestParams, name: &str, ids: &[i64]) -> RequestParams {
    if ids.is_empty() {
        return params;
    }
    params.with(name, ids)
}

fn paged(offset: Option<u32>, per_page: Option<u32>) -> RequestParams {
    RequestParams::new()
        .with_opt("offset", offset)
        .with_opt("per_page", per_page)
}

/// Offset/page-size pair accepted by every listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Index of the first item to return.
    pub offset: Option<u32>,
    /// Maximum number of items to return.
    pub per_page: Option<u32>,
}

impl PageQuery {
    /// Creates a page query with both values set.
    #[must_use]
    pub fn new(offset: u32, per_page: u32) -> Self {
        Self {
            offset: Some(offset),
            per_page: Some(per_page),
        }
    }
}

impl QueryParams for PageQuery {
    fn to_params(&self) -> RequestParams {
        paged(self.offset, self.per_page)
    }
}

/// Inline price options shared by event, market and runner listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceOptions {
    /// Embed prices in the response.
    pub include_prices: Option<bool>,
    /// Number of price levels per side.
    pub price_depth: Option<u32>,
    /// Price grouping.
    pub price_mode: Option<PriceMode>,
    /// Odds format.
    pub odds_type: Option<OddsType>,
    /// Exchange model.
    pub exchange_type: Option<ExchangeType>,
    /// Restrict prices to one side.
    pub side: Option<Side>,
    /// Currency liquidity is expressed in.
    pub currency: Option<Currency>,
    /// Hide prices with less available liquidity.
    pub minimum_liquidity: Option<Decimal>,
}

impl PriceOptions {
    /// Options that only switch inline prices on.
    #[must_use]
    pub fn included() -> Self {
        Self {
            include_prices: Some(true),
            ..Default::default()
        }
    }

    fn extend(&self, params: RequestParams) -> RequestParams {
        params
            .with_opt("include_prices", self.include_prices)
            .with_opt("price_depth", self.price_depth)
            .with_opt("price_mode", self.price_mode)
            .with_opt("odds_type", self.odds_type)
            .with_opt("exchange_type", self.exchange_type)
            .with_opt("side", self.side)
            .with_opt("currency", self.currency)
            .with_opt("minimum_liquidity", self.minimum_liquidity)
    }
}

/// Parameters for the sports lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SportsQuery {
    /// Index of the first sport.
    pub offset: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Sort order.
    pub order: Option<SortOrder>,
    /// Status filter.
    pub status: Option<SportStatus>,
}

impl QueryParams for SportsQuery {
    fn to_params(&self) -> RequestParams {
        paged(self.offset, self.per_page)
            .with_opt("order", self.order)
            .with_opt("status", self.status)
    }
}

/// Parameters for the events listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsQuery {
    /// Index of the first event.
    pub offset: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Only events starting after this instant.
    pub after: Option<DateTime<Utc>>,
    /// Only events starting before this instant.
    pub before: Option<DateTime<Utc>>,
    /// Restrict to these sports.
    pub sport_ids: Vec<i64>,
    /// Restrict to these events.
    pub ids: Vec<i64>,
    /// Trading state filter.
    pub states: Option<MarketState>,
    /// Comma-separated navigation tag names.
    pub tag_url_names: Option<String>,
    /// Inline price options.
    pub prices: PriceOptions,
}

impl QueryParams for EventsQuery {
    fn to_params(&self) -> RequestParams {
        let params = paged(self.offset, self.per_page)
            .with_opt("after", self.after)
            .with_opt("before", self.before);
        let params = with_ids(params, "sport_ids", &self.sport_ids);
        let params = with_ids(params, "ids", &self.ids)
            .with_opt("states", self.states)
            .with_opt("tag_url_names", self.tag_url_names.as_deref());
        self.prices.extend(params)
    }
}

/// Parameters for the markets listing of one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketsQuery {
    /// Index of the first market.
    pub offset: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Trading state filter.
    pub states: Option<MarketState>,
    /// Comma-separated market types (e.g. `one_x_two`).
    pub types: Option<String>,
    /// Comma-separated market names.
    pub names: Option<String>,
    /// Inline price options.
    pub prices: PriceOptions,
}

impl QueryParams for MarketsQuery {
    fn to_params(&self) -> RequestParams {
        let params = paged(self.offset, self.per_page)
            .with_opt("states", self.states)
            .with_opt("types", self.types.as_deref())
            .with_opt("names", self.names.as_deref());
        self.prices.extend(params)
    }
}

/// Parameters for the runners listing of one market.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnersQuery {
    /// Trading state filter.
    pub states: Option<MarketState>,
    /// Include runners withdrawn from the market.
    pub include_withdrawn: Option<bool>,
    /// Inline price options.
    pub prices: PriceOptions,
}

impl QueryParams for RunnersQuery {
    fn to_params(&self) -> RequestParams {
        let params = RequestParams::new()
            .with_opt("states", self.states)
            .with_opt("include_withdrawn", self.include_withdrawn);
        self.prices.extend(params)
    }
}

/// Parameters for the price ladder of one runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricesQuery {
    /// Number of price levels per side.
    pub depth: Option<u32>,
    /// Price grouping.
    pub price_mode: Option<PriceMode>,
    /// Odds format.
    pub odds_type: Option<OddsType>,
    /// Exchange model.
    pub exchange_type: Option<ExchangeType>,
    /// Restrict to one side.
    pub side: Option<Side>,
    /// Currency liquidity is expressed in.
    pub currency: Option<Currency>,
    /// Hide prices with less available liquidity.
    pub minimum_liquidity: Option<Decimal>,
}

impl QueryParams for PricesQuery {
    fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with_opt("depth", self.depth)
            .with_opt("price_mode", self.price_mode)
            .with_opt("odds_type", self.odds_type)
            .with_opt("exchange_type", self.exchange_type)
            .with_opt("side", self.side)
            .with_opt("currency", self.currency)
            .with_opt("minimum_liquidity", self.minimum_liquidity)
    }
}

/// Parameters for the offers listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffersQuery {
    /// Index of the first offer.
    pub offset: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Restrict to these sports.
    pub sport_ids: Vec<i64>,
    /// Restrict to these events.
    pub event_ids: Vec<i64>,
    /// Restrict to these markets.
    pub market_ids: Vec<i64>,
    /// Restrict to these runners.
    pub runner_ids: Vec<i64>,
    /// Restrict to one side.
    pub side: Option<Side>,
    /// Lifecycle status filter.
    pub status: Option<OfferStatus>,
    /// Only offers changed in the last `interval` seconds.
    pub interval: Option<u32>,
}

impl QueryParams for OffersQuery {
    fn to_params(&self) -> RequestParams {
        let params = paged(self.offset, self.per_page);
        let params = with_ids(params, "sport_ids", &self.sport_ids);
        let params = with_ids(params, "event_ids", &self.event_ids);
        let params = with_ids(params, "market_ids", &self.market_ids);
        with_ids(params, "runner_ids", &self.runner_ids)
            .with_opt("side", self.side)
            .with_opt("status", self.status)
            .with_opt("interval", self.interval)
    }
}

/// Parameters for the positions listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionsQuery {
    /// Index of the first position.
    pub offset: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Restrict to these events.
    pub event_ids: Vec<i64>,
    /// Restrict to these markets.
    pub market_ids: Vec<i64>,
    /// Restrict to these runners.
    pub runner_ids: Vec<i64>,
}

impl QueryParams for PositionsQuery {
    fn to_params(&self) -> RequestParams {
        let params = paged(self.offset, self.per_page);
        let params = with_ids(params, "event_ids", &self.event_ids);
        let params = with_ids(params, "market_ids", &self.market_ids);
        with_ids(params, "runner_ids", &self.runner_ids)
    }
}

/// Parameters for the aggregated matched bets listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetsQuery {
    /// Index of the first bet.
    pub offset: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Restrict to these events.
    pub event_ids: Vec<i64>,
    /// Restrict to these markets.
    pub market_ids: Vec<i64>,
    /// Restrict to these runners.
    pub runner_ids: Vec<i64>,
    /// Restrict to one side.
    pub side: Option<Side>,
}

impl QueryParams for BetsQuery {
    fn to_params(&self) -> RequestParams {
        let params = paged(self.offset, self.per_page);
        let params = with_ids(params, "event_ids", &self.event_ids);
        let params = with_ids(params, "market_ids", &self.market_ids);
        with_ids(params, "runner_ids", &self.runner_ids).with_opt("side", self.side)
    }
}

/// Parameters for the account transactions report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionsQuery {
    /// Index of the first transaction.
    pub offset: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Only transactions after this instant.
    pub after: Option<DateTime<Utc>>,
    /// Only transactions before this instant.
    pub before: Option<DateTime<Utc>>,
    /// Comma-separated transaction categories.
    pub categories: Option<String>,
}

impl QueryParams for TransactionsQuery {
    fn to_params(&self) -> RequestParams {
        paged(self.offset, self.per_page)
            .with_opt("after", self.after)
            .with_opt("before", self.before)
            .with_opt("categories", self.categories.as_deref())
    }
}
