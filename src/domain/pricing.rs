use rust_decimal::Decimal;

/// Best bid/ask snapshot for a single instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub instrument: String,
    pub tradeable: bool,
    pub bid: Decimal,
    pub ask: Decimal,
}

/// Flattened pricing reply, one [`Price`] per instrument in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResponse {
    /// Server timestamp, kept verbatim.
    pub time: String,
    pub prices: Vec<Price>,
}

impl PricingResponse {
    pub fn first(&self) -> Option<&Price> {
        self.prices.first()
    }
}
