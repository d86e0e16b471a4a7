use crate::domain::orders::OrderResponse;
use crate::domain::pricing::PricingResponse;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
pub trait PricingService: Send + Sync {
    /// Best bid/ask for each instrument, in the order the broker returns them.
    async fn get_prices(&self, instruments: &[String]) -> Result<PricingResponse>;
}

#[async_trait]
pub trait OrderService: Send + Sync {
    /// Fill-or-kill market order; a negative `units` sells.
    async fn place_market_order(
        &self,
        units: i64,
        instrument: &str,
        price_bound: Decimal,
    ) -> Result<OrderResponse>;
}
