//! Resource operations.
//!
//! Every operation follows the same steps: build the parameter set from its
//! query struct, resolve the path, send it with the current session token and
//! return the normalized result. Payloads are returned as raw JSON.

use serde::Serialize;
use serde_json::Value;

use super::auth::{MatchbookClient, Verb};
use super::error::ClientError;
use super::response::ApiResult;
use crate::params::RequestParams;
use crate::types::{
    BetsQuery, EditOffers, EventsQuery, MarketsQuery, OffersQuery, PageQuery, PositionsQuery,
    PricesQuery, QueryParams, RunnersQuery, SportsQuery, SubmitOffers, TransactionsQuery,
};

const ACCOUNT_PATH: &str = "/edge/rest/account";
const BALANCE_PATH: &str = "/edge/rest/account/balance";
const POSITIONS_PATH: &str = "/edge/rest/account/positions";
const SPORTS_PATH: &str = "/edge/rest/lookups/sports";
const CURRENCIES_PATH: &str = "/edge/rest/lookups/currencies";
const COUNTRIES_PATH: &str = "/edge/rest/lookups/countries";
const ODDS_TYPES_PATH: &str = "/edge/rest/lookups/odds-types";
const NAVIGATION_PATH: &str = "/edge/rest/navigation";
const EVENTS_PATH: &str = "/edge/rest/events";
const OFFERS_PATH: &str = "/edge/rest/v2/offers";
const MATCHED_BETS_PATH: &str = "/edge/rest/bets/matched/aggregated";
const TRANSACTIONS_PATH: &str = "/edge/rest/reports/v2/transactions";
const HEARTBEAT_PATH: &str = "/edge/rest/v1/policies/security/heartbeat";

fn market_path(event_id: i64, market_id: i64) -> String {
    format!("{}/{}/markets/{}", EVENTS_PATH, event_id, market_id)
}

fn runner_path(event_id: i64, market_id: i64, runner_id: i64) -> String {
    format!("{}/runners/{}", market_path(event_id, market_id), runner_id)
}

fn to_body<T: Serialize>(body: &T) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Serialization(e.to_string()))
}

impl MatchbookClient {
    async fn get_with(&self, path: &str, params: &RequestParams) -> Result<ApiResult, ClientError> {
        self.call(Verb::Get, &params.append_to(path)).await
    }

    /// Gets the account profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_account(&self) -> Result<ApiResult, ClientError> {
        self.call(Verb::Get, ACCOUNT_PATH).await
    }

    /// Gets the account balance, exposure and free funds.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_balance(&self) -> Result<ApiResult, ClientError> {
        self.call(Verb::Get, BALANCE_PATH).await
    }

    /// Lists sports.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_sports(&self, query: &SportsQuery) -> Result<ApiResult, ClientError> {
        self.get_with(SPORTS_PATH, &query.to_params()).await
    }

    /// Gets the navigation tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_navigation(&self, query: &PageQuery) -> Result<ApiResult, ClientError> {
        self.get_with(NAVIGATION_PATH, &query.to_params()).await
    }

    /// Lists events.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_events(&self, query: &EventsQuery) -> Result<ApiResult, ClientError> {
        self.get_with(EVENTS_PATH, &query.to_params()).await
    }

    /// Gets a single event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_event(&self, event_id: i64) -> Result<ApiResult, ClientError> {
        let path = format!("{}/{}", EVENTS_PATH, event_id);
        self.call(Verb::Get, &path).await
    }

    /// Lists the markets of an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_markets(
        &self,
        event_id: i64,
        query: &MarketsQuery,
    ) -> Result<ApiResult, ClientError> {
        let path = format!("{}/{}/markets", EVENTS_PATH, event_id);
        self.get_with(&path, &query.to_params()).await
    }

    /// Gets a single market.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_market(
        &self,
        event_id: i64,
        market_id: i64,
    ) -> Result<ApiResult, ClientError> {
        self.call(Verb::Get, &market_path(event_id, market_id)).await
    }

    /// Lists the runners of a market.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_runners(
        &self,
        event_id: i64,
        market_id: i64,
        query: &RunnersQuery,
    ) -> Result<ApiResult, ClientError> {
        let path = format!("{}/runners", market_path(event_id, market_id));
        self.get_with(&path, &query.to_params()).await
    }

    /// Gets a single runner.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_runner(
        &self,
        event_id: i64,
        market_id: i64,
        runner_id: i64,
    ) -> Result<ApiResult, ClientError> {
        let path = runner_path(event_id, market_id, runner_id);
        self.call(Verb::Get, &path).await
    }

    /// Gets the price ladder of a runner.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_prices(
        &self,
        event_id: i64,
        market_id: i64,
        runner_id: i64,
        query: &PricesQuery,
    ) -> Result<ApiResult, ClientError> {
        let path = format!("{}/prices", runner_path(event_id, market_id, runner_id));
        self.get_with(&path, &query.to_params()).await
    }

    /// Lists the account's offers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_offers(&self, query: &OffersQuery) -> Result<ApiResult, ClientError> {
        self.get_with(OFFERS_PATH, &query.to_params()).await
    }

    /// Gets a single offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_offer(&self, offer_id: i64) -> Result<ApiResult, ClientError> {
        let path = format!("{}/{}", OFFERS_PATH, offer_id);
        self.call(Verb::Get, &path).await
    }

    /// Submits a batch of offers.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the request
    /// cannot be sent.
    pub async fn submit_offers(&self, offers: &SubmitOffers) -> Result<ApiResult, ClientError> {
        let body = to_body(offers)?;
        self.call(Verb::Post(&body), OFFERS_PATH).await
    }

    /// Edits odds and stakes of existing offers.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the request
    /// cannot be sent.
    pub async fn edit_offers(&self, edits: &EditOffers) -> Result<ApiResult, ClientError> {
        let body = to_body(edits)?;
        self.call(Verb::Put(&body), OFFERS_PATH).await
    }

    /// Cancels offers matching the filter. An empty filter cancels every
    /// open offer on the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn cancel_offers(&self, query: &OffersQuery) -> Result<ApiResult, ClientError> {
        let path = query.to_params().append_to(OFFERS_PATH);
        self.call(Verb::Delete, &path).await
    }

    /// Cancels a single offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn cancel_offer(&self, offer_id: i64) -> Result<ApiResult, ClientError> {
        let path = format!("{}/{}", OFFERS_PATH, offer_id);
        self.call(Verb::Delete, &path).await
    }

    /// Lists the account's positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_positions(&self, query: &PositionsQuery) -> Result<ApiResult, ClientError> {
        self.get_with(POSITIONS_PATH, &query.to_params()).await
    }

    /// Lists matched bets aggregated per runner and side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_matched_bets(&self, query: &BetsQuery) -> Result<ApiResult, ClientError> {
        self.get_with(MATCHED_BETS_PATH, &query.to_params()).await
    }

    /// Gets the account transactions report.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<ApiResult, ClientError> {
        self.get_with(TRANSACTIONS_PATH, &query.to_params()).await
    }

    /// Lists supported currencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_currencies(&self) -> Result<ApiResult, ClientError> {
        self.call(Verb::Get, CURRENCIES_PATH).await
    }

    /// Lists countries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_countries(&self, query: &PageQuery) -> Result<ApiResult, ClientError> {
        self.get_with(COUNTRIES_PATH, &query.to_params()).await
    }

    /// Lists supported odds formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_odds_types(&self) -> Result<ApiResult, ClientError> {
        self.call(Verb::Get, ODDS_TYPES_PATH).await
    }

    /// Arms the cancel-on-disconnect heartbeat. If no further heartbeat
    /// arrives within `timeout_secs`, the exchange cancels all open offers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn heartbeat(&self, timeout_secs: u32) -> Result<ApiResult, ClientError> {
        let body = RequestParams::new().with("timeout", timeout_secs).to_json();
        self.call(Verb::Post(&body), HEARTBEAT_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(market_path(1, 2), "/edge/rest/events/1/markets/2");
        assert_eq!(
            runner_path(1, 2, 3),
            "/edge/rest/events/1/markets/2/runners/3"
        );
    }

    #[test]
    fn test_to_body_uses_kebab_case() {
        let edits = EditOffers { offers: vec![] };
        assert_eq!(to_body(&edits).unwrap(), serde_json::json!({"offers": []}));
    }
}
