//! # brokerage-rs
//!
//! Brokerage fee engine for Indian cash equity trades: itemized charges per
//! trade under each broker's rate card, and buy/sell P&L aggregated across a
//! selection of orders.
//!
//! ## Quick Start
//!
//! ```
//! use brokerage_rs::aggregator::aggregate;
//! use brokerage_rs::calculator::ChargeCalculator;
//! use brokerage_rs::registry::FeeScheduleRegistry;
//! use brokerage_rs::types::{Broker, TradeFact, TradeSide};
//! use rust_decimal_macros::dec;
//!
//! fn main() -> brokerage_rs::Result<()> {
//!     let registry = FeeScheduleRegistry::standard();
//!     let calculator = ChargeCalculator::new(&registry);
//!
//!     let sell = TradeFact::new("INFY", 10, dec!(100), TradeSide::SELL, Broker::Zerodha);
//!     let charges = calculator.charges_for(&sell)?;
//!     assert_eq!(charges.total, dec!(18.15));
//!
//!     let summary = aggregate(&[(sell, charges)])?;
//!     assert_eq!(summary.net_pl, dec!(981.85));
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod calculator;
pub mod constants;
pub mod error;
pub mod registry;
pub mod service;
pub mod types;
pub mod validation;

/// Re-export the registry at crate root for convenience.
pub use registry::FeeScheduleRegistry;
/// Re-export the error type and Result alias.
pub use error::{BrokerageError, Result};
