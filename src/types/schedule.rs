//! Broker fee schedule type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A broker's rate card for cash equity trades.
///
/// Every rate is a percentage of turnover (`0.1` means 0.1%), except
/// [`dp_charges`](Self::dp_charges), which is a flat fee in INR applied once
/// per delivery sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerSchedule {
    /// Brokerage on delivery buys.
    pub delivery_buy_rate: Decimal,
    /// Brokerage on delivery sells.
    pub delivery_sell_rate: Decimal,
    /// Brokerage on intraday trades, either side.
    pub intraday_rate: Decimal,
    /// Securities transaction tax, sell side only.
    pub stt_rate: Decimal,
    /// Exchange transaction charges, both sides.
    pub transaction_charge_rate: Decimal,
    /// GST, levied on brokerage plus transaction charges.
    pub gst_rate: Decimal,
    /// SEBI turnover fee, both sides.
    pub sebi_rate: Decimal,
    /// Stamp duty, buy side only.
    pub stamp_duty_rate: Decimal,
    /// Flat depository participant fee in INR.
    pub dp_charges: Decimal,
}
