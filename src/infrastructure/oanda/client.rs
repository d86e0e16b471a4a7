//! OANDA v20 REST client: pricing snapshot and market order placement.

use crate::config::{Credentials, OandaConfig};
use crate::domain::errors::OandaError;
use crate::domain::orders::OrderResponse;
use crate::domain::ports::{OrderService, PricingService};
use crate::domain::pricing::PricingResponse;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use crate::infrastructure::oanda::models::{MarketOrderRequest, RawPricingResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};
use url::Url;

pub struct OandaClient {
    credentials: Credentials,
    api_base_url: Url,
    client: Client,
}

impl OandaClient {
    pub fn new(credentials: Credentials, api_base_url: Url) -> Self {
        Self::with_http_client(credentials, api_base_url, HttpClientFactory::create_client())
    }

    pub fn with_http_client(credentials: Credentials, api_base_url: Url, client: Client) -> Self {
        Self {
            credentials,
            api_base_url,
            client,
        }
    }

    /// Loads credentials from the configured file and builds a client.
    pub fn from_config(config: &OandaConfig) -> Result<Self> {
        let credentials = Credentials::from_file(&config.credentials_path)?;
        Ok(Self::new(credentials, config.base_url()?))
    }

    /// `{base}/v3/accounts/{accountID}/{resource}`
    fn endpoint(&self, resource: &str) -> Result<Url> {
        let mut base = self.api_base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&format!(
            "v3/accounts/{}/{}",
            self.credentials.account_id, resource
        ))
        .with_context(|| format!("Failed to build OANDA {} URL", resource))
    }

    /// Fetches the current best bid/ask for `instruments`.
    ///
    /// Anything other than 200 is an error. Each instrument must carry at
    /// least one bid and one ask level or the whole call fails.
    #[instrument(skip(self), fields(account = %self.credentials.account_id))]
    pub async fn get_prices(&self, instruments: &[String]) -> Result<PricingResponse> {
        if instruments.is_empty() {
            return Err(OandaError::NoInstruments.into());
        }

        let url = self.endpoint("pricing")?;
        let instruments = instruments.join(",");
        debug!("GET {} instruments={}", url, instruments);

        let resp = self
            .client
            .get(url)
            .query(&[("instruments", &instruments)])
            .header(AUTHORIZATION, self.credentials.authorization())
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if status != StatusCode::OK {
            warn!("OANDA pricing request failed: {}", status);
            return Err(OandaError::UnexpectedStatus {
                endpoint: "pricing",
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let raw: RawPricingResponse =
            serde_json::from_str(&body).context("Failed to decode OANDA pricing response")?;
        let response = PricingResponse::try_from(raw)?;

        info!("Retrieved {} prices", response.prices.len());
        Ok(response)
    }

    /// Submits a fill-or-kill market order. Positive `units` buy, negative sell.
    /// The fill must not be worse than `price_bound`.
    #[instrument(skip(self), fields(account = %self.credentials.account_id))]
    pub async fn place_market_order(
        &self,
        units: i64,
        instrument: &str,
        price_bound: Decimal,
    ) -> Result<OrderResponse> {
        let url = self.endpoint("orders")?;
        let request = MarketOrderRequest::fill_or_kill(units, instrument, price_bound);
        debug!("POST {} {:?}", url, request);

        let resp = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.credentials.authorization())
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if status != StatusCode::CREATED {
            warn!("OANDA order request failed: {}", status);
            return Err(OandaError::UnexpectedStatus {
                endpoint: "orders",
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let response: OrderResponse =
            serde_json::from_str(&body).context("Failed to decode OANDA order response")?;

        info!(
            "Market order accepted: last transaction {}",
            response.last_transaction_id
        );
        Ok(response)
    }
}

#[async_trait]
impl PricingService for OandaClient {
    async fn get_prices(&self, instruments: &[String]) -> Result<PricingResponse> {
        OandaClient::get_prices(self, instruments).await
    }
}

#[async_trait]
impl OrderService for OandaClient {
    async fn place_market_order(
        &self,
        units: i64,
        instrument: &str,
        price_bound: Decimal,
    ) -> Result<OrderResponse> {
        OandaClient::place_market_order(self, units, instrument, price_bound).await
    }
}
