//! P&L calculation types — summaries and their persisted records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Calculation Summary
// ---------------------------------------------------------------------------

/// Totals over a selection of trades, rounded to two decimal places.
///
/// `gross_pl = sell_total - buy_total` and
/// `net_pl = gross_pl - buy_charges - sell_charges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    /// Turnover of all buy trades.
    pub buy_total: Decimal,
    /// Turnover of all sell trades.
    pub sell_total: Decimal,
    /// Charges on all buy trades.
    pub buy_charges: Decimal,
    /// Charges on all sell trades.
    pub sell_charges: Decimal,
    #[serde(rename = "grossPL")]
    pub gross_pl: Decimal,
    #[serde(rename = "netPL")]
    pub net_pl: Decimal,
    /// Number of trades folded in, duplicates included.
    pub trade_count: usize,
}

impl CalculationSummary {
    /// Sum of buy and sell charges.
    pub fn total_charges(&self) -> Decimal {
        self.buy_charges + self.sell_charges
    }
}

// ---------------------------------------------------------------------------
// Calculation Record
// ---------------------------------------------------------------------------

/// A calculation summary together with the identity the persistence layer
/// stores it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub id: Uuid,
    pub user_id: String,
    /// Ids of the orders that fed the summary, in request order.
    pub orders: Vec<String>,
    #[serde(flatten)]
    pub summary: CalculationSummary,
    pub created_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Wrap a summary in a new record with a fresh id and the current time.
    pub fn new(user_id: impl Into<String>, orders: Vec<String>, summary: CalculationSummary) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            orders,
            summary,
            created_at: Utc::now(),
        }
    }
}
