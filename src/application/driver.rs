use crate::domain::errors::OandaError;
use crate::domain::orders::OrderResponse;
use crate::domain::ports::{OrderService, PricingService};
use crate::domain::pricing::PricingResponse;
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

pub const DEFAULT_INSTRUMENTS: [&str; 3] = ["GBP_USD", "EUR_GBP", "GBP_JPY"];

/// Units sent when the first instrument is tradeable.
pub const ORDER_UNITS: i64 = 1;

#[derive(Debug)]
pub enum OrderOutcome {
    Placed(Box<OrderResponse>),
    /// Order call failed; the run still completes.
    Failed(String),
    NotTradeable { instrument: String },
}

#[derive(Debug)]
pub struct DriverReport {
    pub prices: PricingResponse,
    pub order: OrderOutcome,
}

/// One-shot run: price the instruments, then buy one unit of the first
/// instrument at its ask if it is tradeable.
pub struct Driver {
    pricing: Arc<dyn PricingService>,
    orders: Arc<dyn OrderService>,
    instruments: Vec<String>,
}

impl Driver {
    pub fn new(
        pricing: Arc<dyn PricingService>,
        orders: Arc<dyn OrderService>,
        instruments: Vec<String>,
    ) -> Self {
        Self {
            pricing,
            orders,
            instruments,
        }
    }

    pub fn with_default_instruments(
        pricing: Arc<dyn PricingService>,
        orders: Arc<dyn OrderService>,
    ) -> Self {
        let instruments = DEFAULT_INSTRUMENTS.iter().map(|s| s.to_string()).collect();
        Self::new(pricing, orders, instruments)
    }

    pub fn instruments(&self) -> &[String] {
        &self.instruments
    }

    /// Pricing failure aborts the run. Order failure is logged and reported
    /// in the returned [`DriverReport`].
    pub async fn run(&self) -> Result<DriverReport> {
        let prices = match self.pricing.get_prices(&self.instruments).await {
            Ok(prices) => prices,
            Err(e) => {
                error!("Error retrieving prices: {:#}", e);
                return Err(e);
            }
        };
        info!("Prices retrieved successfully.");
        info!("{:#?}", prices);

        let Some(first) = prices.first() else {
            error!("Pricing response contained no prices");
            return Err(OandaError::EmptyPricing.into());
        };

        if !first.tradeable {
            info!(
                "Not placing market order: {} currently not tradeable.",
                first.instrument
            );
            let instrument = first.instrument.clone();
            return Ok(DriverReport {
                prices,
                order: OrderOutcome::NotTradeable { instrument },
            });
        }

        let order = match self
            .orders
            .place_market_order(ORDER_UNITS, &first.instrument, first.ask)
            .await
        {
            Ok(response) => {
                info!("Market order placed successfully.");
                info!("{:#?}", response);
                OrderOutcome::Placed(Box::new(response))
            }
            Err(e) => {
                error!("Error placing market order: {:#}", e);
                OrderOutcome::Failed(format!("{:#}", e))
            }
        };

        Ok(DriverReport { prices, order })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::Price;
    use crate::infrastructure::mock::{MockBroker, RecordedOrder};
    use rust_decimal_macros::dec;

    fn pricing(tradeable: bool) -> PricingResponse {
        PricingResponse {
            time: "2024-03-01T12:00:00.000000000Z".to_string(),
            prices: vec![
                Price {
                    instrument: "GBP_USD".to_string(),
                    tradeable,
                    bid: dec!(1.27010),
                    ask: dec!(1.27025),
                },
                Price {
                    instrument: "EUR_GBP".to_string(),
                    tradeable: true,
                    bid: dec!(0.85512),
                    ask: dec!(0.85530),
                },
            ],
        }
    }

    fn driver(broker: &MockBroker) -> Driver {
        let broker = Arc::new(broker.clone());
        Driver::with_default_instruments(broker.clone(), broker)
    }

    #[tokio::test]
    async fn test_tradeable_first_instrument_places_one_unit_at_ask() {
        let broker = MockBroker::new(pricing(true));

        let report = driver(&broker).run().await.unwrap();

        assert!(matches!(report.order, OrderOutcome::Placed(_)));
        assert_eq!(
            broker.orders().await,
            vec![RecordedOrder {
                units: 1,
                instrument: "GBP_USD".to_string(),
                price_bound: dec!(1.27025),
            }]
        );
        assert_eq!(
            broker.price_requests().await,
            vec![vec![
                "GBP_USD".to_string(),
                "EUR_GBP".to_string(),
                "GBP_JPY".to_string()
            ]]
        );
    }

    #[tokio::test]
    async fn test_untradeable_first_instrument_places_nothing() {
        let broker = MockBroker::new(pricing(false));

        let report = driver(&broker).run().await.unwrap();

        assert!(matches!(
            report.order,
            OrderOutcome::NotTradeable { ref instrument } if instrument == "GBP_USD"
        ));
        assert!(broker.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_pricing_failure_halts_before_ordering() {
        let broker = MockBroker::unavailable();

        assert!(driver(&broker).run().await.is_err());
        assert!(broker.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_order_failure_is_reported_not_raised() {
        let broker = MockBroker::new(pricing(true));
        broker.reject_orders("insufficient margin").await;

        let report = driver(&broker).run().await.unwrap();

        match report.order {
            OrderOutcome::Failed(reason) => assert!(reason.contains("insufficient margin")),
            other => panic!("expected failed order, got {:?}", other),
        }
        assert_eq!(report.prices.prices.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_pricing_is_an_error() {
        let broker = MockBroker::new(PricingResponse {
            time: "t".to_string(),
            prices: vec![],
        });

        let err = driver(&broker).run().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<OandaError>(),
            Some(OandaError::EmptyPricing)
        ));
        assert!(broker.orders().await.is_empty());
    }
}
