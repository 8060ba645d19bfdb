//! Constants for the supported broker fee schedules and order input limits.
//!
//! Contains the published rate cards for every supported broker and the
//! bounds enforced by the [`validation`](crate::validation) layer. These are
//! used internally by [`FeeScheduleRegistry::standard`](crate::registry::FeeScheduleRegistry::standard),
//! but are also exported for advanced usage.
//!
//! Rates are percentages of turnover (`0.1` means 0.1%), except the DP
//! charge which is a flat fee in INR.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Output precision
// ---------------------------------------------------------------------------

/// Number of decimal places every charge and summary field is rounded to.
pub const MONEY_DP: u32 = 2;

// ---------------------------------------------------------------------------
// Broker Rate Cards
// ---------------------------------------------------------------------------

/// Zerodha equity rate card.
pub mod zerodha {
    use super::*;

    /// Equity delivery brokerage on the buy leg.
    pub const DELIVERY_BUY: Decimal = dec!(0);
    /// Equity delivery brokerage on the sell leg.
    pub const DELIVERY_SELL: Decimal = dec!(0.1);
    /// Equity intraday brokerage on either leg.
    pub const INTRADAY: Decimal = dec!(0.03);
    /// Securities transaction tax.
    pub const STT: Decimal = dec!(0.1);
    /// Exchange transaction charges.
    pub const TRANSACTION: Decimal = dec!(0.00345);
    /// GST on brokerage and transaction charges.
    pub const GST: Decimal = dec!(18);
    /// SEBI turnover fee.
    pub const SEBI: Decimal = dec!(0.0001);
    /// Stamp duty on the buy leg.
    pub const STAMP_DUTY: Decimal = dec!(0.015);
    /// Depository participant charge per delivery sell (INR).
    pub const DP_FLAT: Decimal = dec!(15.93);
}

/// Groww equity rate card.
pub mod groww {
    use super::*;

    /// Equity delivery brokerage on the buy leg.
    pub const DELIVERY_BUY: Decimal = dec!(0);
    /// Equity delivery brokerage on the sell leg.
    pub const DELIVERY_SELL: Decimal = dec!(0.05);
    /// Equity intraday brokerage on either leg.
    pub const INTRADAY: Decimal = dec!(0.05);
    /// Securities transaction tax.
    pub const STT: Decimal = dec!(0.1);
    /// Exchange transaction charges.
    pub const TRANSACTION: Decimal = dec!(0.00345);
    /// GST on brokerage and transaction charges.
    pub const GST: Decimal = dec!(18);
    /// SEBI turnover fee.
    pub const SEBI: Decimal = dec!(0.0001);
    /// Stamp duty on the buy leg.
    pub const STAMP_DUTY: Decimal = dec!(0.015);
    /// Depository participant charge per delivery sell (INR).
    pub const DP_FLAT: Decimal = dec!(15.93);
}

// ---------------------------------------------------------------------------
// Order Input Limits
// ---------------------------------------------------------------------------

/// Bounds applied to order input before it reaches the charge calculator.
pub mod limits {
    use super::*;

    /// Minimum price increment (tick size) in INR.
    pub const PRICE_TICK: Decimal = dec!(0.05);
    /// Maximum accepted price per share in INR.
    pub const MAX_PRICE: Decimal = dec!(1000000);
    /// Maximum accepted quantity per order.
    pub const MAX_QUANTITY: i64 = 1_000_000;
    /// Maximum symbol length in characters.
    pub const MAX_SYMBOL_LEN: usize = 20;
}
