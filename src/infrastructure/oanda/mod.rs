//! OANDA infrastructure - v20 REST pricing and order placement.
//!
//! Provides [OandaClient], which implements both
//! [PricingService](crate::domain::ports::PricingService) and
//! [OrderService](crate::domain::ports::OrderService).

pub mod client;
pub mod models;

pub use client::OandaClient;
