//! Domain types for the brokerage engine.
//!
//! This module contains the strongly-typed structs used as inputs and
//! outputs of charge computation and P&L aggregation. All of them serialize
//! to the camelCase JSON shape of the order and calculation records.
//!
//! ## Organization
//!
//! - [`enums`] — Brokers, trade sides, and trade kinds
//! - [`schedule`] — Per-broker fee rate card
//! - [`trade`] — Trade facts and recorded orders
//! - [`charges`] — Itemized charge breakdown of a single trade
//! - [`calculation`] — Aggregate P&L summaries and their persisted records
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod calculation;
pub mod charges;
pub mod enums;
pub mod schedule;
pub mod trade;

pub use calculation::{CalculationRecord, CalculationSummary};
pub use charges::ChargeBreakdown;
pub use enums::*;
pub use schedule::BrokerSchedule;
pub use trade::{RecordedOrder, TradeFact};
