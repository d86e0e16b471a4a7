use thiserror::Error;

/// Errors raised while talking to the OANDA v20 REST API
#[derive(Debug, Error)]
pub enum OandaError {
    #[error("No instruments requested")]
    NoInstruments,

    #[error("{status} response code received from {endpoint} endpoint: {body}")]
    UnexpectedStatus {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("No bid prices received for {instrument}")]
    MissingBids { instrument: String },

    #[error("No ask prices received for {instrument}")]
    MissingAsks { instrument: String },

    #[error("Invalid price for {instrument}: {value:?}")]
    InvalidPrice { instrument: String, value: String },

    #[error("Pricing response contained no prices")]
    EmptyPricing,
}

impl OandaError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
