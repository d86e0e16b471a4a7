//! Order placement reply from the v20 orders endpoint.
//!
//! These records are passed through unmodified; every numeric field stays a
//! string exactly as OANDA sends it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderResponse {
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
    pub order_create_transaction: Option<OrderCreateTransaction>,
    pub order_fill_transaction: Option<OrderFillTransaction>,
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderCreateTransaction {
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    pub id: String,
    pub instrument: String,
    pub position_fill: String,
    pub reason: String,
    pub time: String,
    pub time_in_force: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub units: String,
    #[serde(rename = "userID")]
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFillTransaction {
    pub account_balance: String,
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    pub financing: String,
    pub id: String,
    pub instrument: String,
    #[serde(rename = "orderID")]
    pub order_id: String,
    pub pl: String,
    pub price: String,
    pub reason: String,
    pub time: String,
    pub trade_opened: Option<TradeOpened>,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub units: String,
    #[serde(rename = "userID")]
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeOpened {
    #[serde(rename = "tradeID")]
    pub trade_id: String,
    pub units: String,
}

impl OrderResponse {
    /// True when the order was filled rather than killed.
    pub fn is_filled(&self) -> bool {
        self.order_fill_transaction.is_some()
    }
}
