//! OANDA v20 wire shapes for pricing and order placement.

use crate::domain::errors::OandaError;
use crate::domain::pricing::{Price, PricingResponse};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const TIME_IN_FORCE_FOK: &str = "FOK";
pub const ORDER_TYPE_MARKET: &str = "MARKET";
pub const POSITION_FILL_DEFAULT: &str = "DEFAULT";

const PRICE_BOUND_DECIMALS: u32 = 5;

// ===== Pricing =====

#[derive(Debug, Deserialize)]
pub struct RawPricingResponse {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub prices: Vec<RawPrice>,
}

#[derive(Debug, Deserialize)]
pub struct RawPrice {
    pub instrument: String,
    #[serde(default)]
    pub tradeable: bool,
    #[serde(default)]
    pub bids: Vec<PriceBucket>,
    #[serde(default)]
    pub asks: Vec<PriceBucket>,
}

#[derive(Debug, Deserialize)]
pub struct PriceBucket {
    pub price: String,
}

impl TryFrom<RawPricingResponse> for PricingResponse {
    type Error = OandaError;

    /// Keeps only the best (first) bid and ask of each instrument. One
    /// instrument without a bid or ask level fails the whole response.
    fn try_from(raw: RawPricingResponse) -> Result<Self, Self::Error> {
        let prices = raw
            .prices
            .into_iter()
            .map(Price::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            time: raw.time,
            prices,
        })
    }
}

impl TryFrom<RawPrice> for Price {
    type Error = OandaError;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        let bid = match raw.bids.first() {
            Some(level) => parse_price(&raw.instrument, &level.price)?,
            None => {
                return Err(OandaError::MissingBids {
                    instrument: raw.instrument,
                });
            }
        };
        let ask = match raw.asks.first() {
            Some(level) => parse_price(&raw.instrument, &level.price)?,
            None => {
                return Err(OandaError::MissingAsks {
                    instrument: raw.instrument,
                });
            }
        };

        Ok(Self {
            instrument: raw.instrument,
            tradeable: raw.tradeable,
            bid,
            ask,
        })
    }
}

fn parse_price(instrument: &str, value: &str) -> Result<Decimal, OandaError> {
    Decimal::from_str(value).map_err(|_| OandaError::InvalidPrice {
        instrument: instrument.to_string(),
        value: value.to_string(),
    })
}

// ===== Orders =====

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOrderRequest {
    pub order: MarketOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrder {
    pub units: String,
    pub instrument: String,
    pub price_bound: String,
    pub time_in_force: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub position_fill: String,
}

impl MarketOrderRequest {
    /// Fill-or-kill market order. Units and price bound are sent as strings
    /// because that is how v20 types its decimal fields.
    pub fn fill_or_kill(units: i64, instrument: &str, price_bound: Decimal) -> Self {
        Self {
            order: MarketOrder {
                units: units.to_string(),
                instrument: instrument.to_string(),
                price_bound: format_price_bound(price_bound),
                time_in_force: TIME_IN_FORCE_FOK.to_string(),
                order_type: ORDER_TYPE_MARKET.to_string(),
                position_fill: POSITION_FILL_DEFAULT.to_string(),
            },
        }
    }
}

fn format_price_bound(price: Decimal) -> String {
    let rounded =
        price.round_dp_with_strategy(PRICE_BOUND_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.5}", rounded)
}
