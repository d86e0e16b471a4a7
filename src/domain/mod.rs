// Order placement replies
pub mod orders;

// Port interfaces
pub mod ports;

// Pricing snapshots
pub mod pricing;

// Domain-specific error types
pub mod errors;
