pub mod http_client_factory;
pub mod mock;
pub mod oanda;

pub use http_client_factory::HttpClientFactory;
pub use mock::MockBroker;
pub use oanda::OandaClient;
