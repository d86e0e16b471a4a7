// One-shot pricing and order driver
pub mod driver;

pub use driver::{DEFAULT_INSTRUMENTS, Driver, DriverReport, OrderOutcome};
