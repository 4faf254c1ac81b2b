//! Enumerations accepted by the exchange as parameter values.
//!
//! Each variant maps to one fixed wire token. All of them convert into
//! [`ParamValue::Enum`] so they can be passed straight to
//! [`RequestParams`](crate::params::RequestParams).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::ParamValue;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire token for this value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for ParamValue {
            fn from(value: $name) -> Self {
                ParamValue::Enum(value.as_str())
            }
        }
    };
}

wire_enum! {
    /// Sort order for lookup listings.
    SortOrder {
        /// Alphabetical.
        NameAsc => "name asc",
        /// Reverse alphabetical.
        NameDesc => "name desc",
        /// Ascending id.
        IdAsc => "id asc",
        /// Descending id.
        IdDesc => "id desc",
    }
}

wire_enum! {
    /// Sport lookup status filter.
    SportStatus {
        /// Sports with open events.
        Active => "active",
        /// Sports without open events.
        Inactive => "inactive",
    }
}

wire_enum! {
    /// Odds display format.
    OddsType {
        /// Decimal odds.
        Decimal => "DECIMAL",
        /// American odds.
        Us => "US",
        /// Hong Kong odds.
        Hk => "HK",
        /// Malay odds.
        Malay => "MALAY",
        /// Indonesian odds.
        Indo => "INDO",
        /// Implied probability.
        Percentage => "%",
    }
}

wire_enum! {
    /// Exchange model.
    ExchangeType {
        /// Classic back/lay exchange.
        BackLay => "back-lay",
        /// Binary exchange.
        Binary => "binary",
    }
}

wire_enum! {
    /// Offer side.
    Side {
        /// Back (for) a runner.
        Back => "back",
        /// Lay (against) a runner.
        Lay => "lay",
        /// Binary win.
        Win => "win",
        /// Binary lose.
        Lose => "lose",
    }
}

wire_enum! {
    /// Account currency.
    Currency {
        /// Euro.
        Eur => "EUR",
        /// Pound sterling.
        Gbp => "GBP",
        /// US dollar.
        Usd => "USD",
        /// Australian dollar.
        Aud => "AUD",
        /// Canadian dollar.
        Cad => "CAD",
    }
}

wire_enum! {
    /// How prices are grouped in price listings.
    PriceMode {
        /// Every price level.
        Expanded => "expanded",
        /// Prices aggregated into ladder steps.
        Aggregated => "aggregated",
    }
}

wire_enum! {
    /// Offer lifecycle status filter.
    OfferStatus {
        /// Unmatched.
        Open => "open",
        /// Fully matched.
        Matched => "matched",
        /// Cancelled by the user or the exchange.
        Cancelled => "cancelled",
    }
}

wire_enum! {
    /// Event or market trading state filter.
    MarketState {
        /// Accepting offers.
        Open => "open",
        /// Temporarily closed to new offers.
        Suspended => "suspended",
        /// Closed for trading.
        Closed => "closed",
        /// Settled.
        Graded => "graded",
    }
}
