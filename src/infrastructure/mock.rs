use crate::domain::orders::{OrderCreateTransaction, OrderResponse};
use crate::domain::ports::{OrderService, PricingService};
use crate::domain::pricing::PricingResponse;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Order submitted to [`MockBroker`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedOrder {
    pub units: i64,
    pub instrument: String,
    pub price_bound: Decimal,
}

/// In-memory broker returning canned pricing and recording every order.
#[derive(Clone)]
pub struct MockBroker {
    pricing: Arc<RwLock<Option<PricingResponse>>>,
    reject_orders: Arc<RwLock<Option<String>>>,
    orders: Arc<RwLock<Vec<RecordedOrder>>>,
    price_requests: Arc<RwLock<Vec<Vec<String>>>>,
}

impl MockBroker {
    pub fn new(pricing: PricingResponse) -> Self {
        Self {
            pricing: Arc::new(RwLock::new(Some(pricing))),
            reject_orders: Arc::new(RwLock::new(None)),
            orders: Arc::new(RwLock::new(Vec::new())),
            price_requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Broker whose pricing endpoint always fails.
    pub fn unavailable() -> Self {
        Self {
            pricing: Arc::new(RwLock::new(None)),
            ..Self::new(PricingResponse {
                time: String::new(),
                prices: Vec::new(),
            })
        }
    }

    /// Makes every subsequent order fail with `reason`.
    pub async fn reject_orders(&self, reason: impl Into<String>) {
        *self.reject_orders.write().await = Some(reason.into());
    }

    pub async fn orders(&self) -> Vec<RecordedOrder> {
        self.orders.read().await.clone()
    }

    pub async fn price_requests(&self) -> Vec<Vec<String>> {
        self.price_requests.read().await.clone()
    }
}

#[async_trait]
impl PricingService for MockBroker {
    async fn get_prices(&self, instruments: &[String]) -> Result<PricingResponse> {
        self.price_requests.write().await.push(instruments.to_vec());

        match self.pricing.read().await.clone() {
            Some(pricing) => Ok(pricing),
            None => anyhow::bail!("MockBroker: pricing unavailable"),
        }
    }
}

#[async_trait]
impl OrderService for MockBroker {
    async fn place_market_order(
        &self,
        units: i64,
        instrument: &str,
        price_bound: Decimal,
    ) -> Result<OrderResponse> {
        info!(
            "MockBroker: market order {} {} bounded at {}",
            units, instrument, price_bound
        );
        let rejection = self.reject_orders.read().await.clone();

        let id = {
            let mut orders = self.orders.write().await;
            orders.push(RecordedOrder {
                units,
                instrument: instrument.to_string(),
                price_bound,
            });
            orders.len().to_string()
        };

        if let Some(reason) = rejection {
            anyhow::bail!("MockBroker: order rejected: {}", reason);
        }

        Ok(OrderResponse {
            last_transaction_id: id.clone(),
            order_create_transaction: Some(OrderCreateTransaction {
                id: id.clone(),
                instrument: instrument.to_string(),
                units: units.to_string(),
                time_in_force: "FOK".to_string(),
                transaction_type: "MARKET_ORDER".to_string(),
                position_fill: "DEFAULT".to_string(),
                ..Default::default()
            }),
            order_fill_transaction: None,
            related_transaction_ids: vec![id],
        })
    }
}
