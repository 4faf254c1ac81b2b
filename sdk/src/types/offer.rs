//! Offer request bodies.
//!
//! Offers are submitted, edited and cancelled in batches. Odds and stakes use
//! [`Decimal`] and are written as JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{ExchangeType, OddsType, Side};

/// A single offer to place on a runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OfferRequest {
    /// Runner the offer is placed on.
    pub runner_id: i64,
    /// Back or lay.
    pub side: Side,
    /// Requested odds, in the batch's odds format.
    pub odds: Decimal,
    /// Stake in account currency.
    pub stake: Decimal,
    /// Keep the offer open when the event goes in-play.
    pub keep_in_play: bool,
}

impl OfferRequest {
    /// Creates an offer that is cancelled when the event goes in-play.
    #[must_use]
    pub fn new(runner_id: i64, side: Side, odds: Decimal, stake: Decimal) -> Self {
        Self {
            runner_id,
            side,
            odds,
            stake,
            keep_in_play: false,
        }
    }

    /// Keeps the offer open in-play.
    #[must_use]
    pub fn with_keep_in_play(mut self, keep_in_play: bool) -> Self {
        self.keep_in_play = keep_in_play;
        self
    }
}

/// Batch of offers for `POST /edge/rest/v2/offers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SubmitOffers {
    /// Odds format used by every offer in the batch.
    pub odds_type: OddsType,
    /// Exchange model.
    pub exchange_type: ExchangeType,
    /// Offers to place.
    pub offers: Vec<OfferRequest>,
}

impl SubmitOffers {
    /// Creates a decimal-odds back/lay batch.
    #[must_use]
    pub fn new(offers: Vec<OfferRequest>) -> Self {
        Self {
            odds_type: OddsType::Decimal,
            exchange_type: ExchangeType::BackLay,
            offers,
        }
    }
}

/// New odds and/or stake for an existing offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OfferEdit {
    /// Offer being edited.
    pub id: i64,
    /// Replacement odds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odds: Option<Decimal>,
    /// Replacement stake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake: Option<Decimal>,
}

/// Batch of edits for `PUT /edge/rest/v2/offers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EditOffers {
    /// Edits to apply.
    pub offers: Vec<OfferEdit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_offers_wire_shape() {
        let batch = SubmitOffers::new(vec![OfferRequest::new(
            42,
            Side::Back,
            Decimal::new(25, 1),
            Decimal::new(10, 0),
        )
        .with_keep_in_play(true)]);

        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "odds-type": "DECIMAL",
                "exchange-type": "back-lay",
                "offers": [{
                    "runner-id": 42,
                    "side": "back",
                    "odds": 2.5,
                    "stake": 10.0,
                    "keep-in-play": true
                }]
            })
        );
    }

    #[test]
    fn test_offer_edit_skips_unset_fields() {
        let edits = EditOffers {
            offers: vec![OfferEdit {
                id: 9,
                odds: Some(Decimal::new(3, 0)),
                stake: None,
            }],
        };
        let json = serde_json::to_value(&edits).unwrap();
        assert_eq!(json, serde_json::json!({"offers": [{"id": 9, "odds": 3.0}]}));
    }
}
