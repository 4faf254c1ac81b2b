//! Resource operations against the mock exchange.

mod common;

use matchbook_sdk::client::{ClientConfig, MatchbookClient};
use matchbook_sdk::types::{
    EditOffers, EventsQuery, MarketsQuery, OfferEdit, OfferRequest, OfferStatus, OffersQuery,
    PriceOptions, Side, SortOrder, SportStatus, SportsQuery, SubmitOffers,
};
use rust_decimal::Decimal;
use serde_json::json;

use common::{MockExchange, PASSWORD, USERNAME};

async fn logged_in() -> (MatchbookClient, MockExchange) {
    let (base_url, exchange) = common::spawn().await;
    let client =
        MatchbookClient::new(ClientConfig::new(base_url).with_credentials(USERNAME, PASSWORD))
            .unwrap();
    assert!(client.login().await.unwrap().is_success());
    (client, exchange)
}

#[tokio::test]
async fn sports_query_is_encoded() {
    let (client, exchange) = logged_in().await;

    let query = SportsQuery {
        offset: Some(0),
        per_page: Some(20),
        order: Some(SortOrder::NameAsc),
        status: Some(SportStatus::Active),
    };
    let sports = client.get_sports(&query).await.unwrap().into_result().unwrap();

    assert_eq!(sports["sports"][0]["name"], "Soccer");
    assert_eq!(
        exchange.last_request().uri,
        "/edge/rest/lookups/sports?offset=0&per-page=20&order=name%20asc&status=active"
    );
}

#[tokio::test]
async fn unset_parameters_are_not_sent() {
    let (client, exchange) = logged_in().await;

    client.get_events(&EventsQuery::default()).await.unwrap();
    assert_eq!(exchange.last_request().uri, "/edge/rest/events");

    let query = MarketsQuery {
        prices: PriceOptions::included(),
        ..Default::default()
    };
    client.get_markets(101, &query).await.unwrap();
    assert_eq!(
        exchange.last_request().uri,
        "/edge/rest/events/101/markets?include-prices=true"
    );
}

#[tokio::test]
async fn session_token_is_attached() {
    let (client, exchange) = logged_in().await;

    let result = client.get_balance().await.unwrap();

    assert!(result.is_success());
    assert_eq!(
        exchange.last_request().header("session-token"),
        Some("token-1")
    );
}

#[tokio::test]
async fn resource_call_without_login_is_a_failure() {
    let (base_url, _exchange) = common::spawn().await;
    let client = MatchbookClient::new(ClientConfig::new(base_url)).unwrap();

    let result = client.get_account().await.unwrap();

    assert!(result.is_unauthorized());
    assert_eq!(result.messages(), ["You are not logged in."]);
}

#[tokio::test]
async fn submit_offers_posts_json_body() {
    let (client, exchange) = logged_in().await;

    let offers = SubmitOffers::new(vec![OfferRequest::new(
        42,
        Side::Lay,
        Decimal::new(21, 1),
        Decimal::new(5, 0),
    )]);
    let echo = client
        .submit_offers(&offers)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(echo["method"], "POST");
    assert_eq!(echo["uri"], "/edge/rest/v2/offers");
    assert_eq!(echo["body"]["offers"][0]["runner-id"], 42);
    assert_eq!(echo["body"]["offers"][0]["side"], "lay");
    assert_eq!(
        exchange.last_request().header("content-type"),
        Some("application/json")
    );
}

#[tokio::test]
async fn edit_and_cancel_offers() {
    let (client, exchange) = logged_in().await;

    let edits = EditOffers {
        offers: vec![OfferEdit {
            id: 9,
            odds: None,
            stake: Some(Decimal::new(2, 0)),
        }],
    };
    let echo = client.edit_offers(&edits).await.unwrap().into_result().unwrap();
    assert_eq!(echo["method"], "PUT");
    assert_eq!(echo["body"], json!({"offers": [{"id": 9, "stake": 2.0}]}));

    let query = OffersQuery {
        market_ids: vec![5, 6],
        status: Some(OfferStatus::Open),
        ..Default::default()
    };
    client.cancel_offers(&query).await.unwrap();
    let request = exchange.last_request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.uri, "/edge/rest/v2/offers?market-ids=5%2C6&status=open");

    client.cancel_offer(77).await.unwrap();
    assert_eq!(exchange.last_request().uri, "/edge/rest/v2/offers/77");
}

#[tokio::test]
async fn nested_resource_paths() {
    let (client, exchange) = logged_in().await;

    client.get_event(1).await.unwrap();
    assert_eq!(exchange.last_request().uri, "/edge/rest/events/1");

    client.get_runner(1, 2, 3).await.unwrap();
    assert_eq!(
        exchange.last_request().uri,
        "/edge/rest/events/1/markets/2/runners/3"
    );
}

#[tokio::test]
async fn heartbeat_sends_timeout() {
    let (client, _exchange) = logged_in().await;

    let echo = client.heartbeat(20).await.unwrap().into_result().unwrap();

    assert_eq!(echo["uri"], "/edge/rest/v1/policies/security/heartbeat");
    assert_eq!(echo["body"], json!({"timeout": 20}));
}
