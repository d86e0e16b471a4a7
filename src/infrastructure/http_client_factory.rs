use reqwest::Client;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used for OANDA calls.
    ///
    /// No retry middleware and no timeout override: each call is a single
    /// attempt with the library defaults.
    pub fn create_client() -> Client {
        Client::builder()
            .user_agent(concat!("fxtrader/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}
