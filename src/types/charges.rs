//! Itemized charge breakdown type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The seven charge components of one trade and their total, in INR.
///
/// Produced by [`compute`](crate::calculator::compute). Every component is
/// rounded to two decimal places and `total` is the exact sum of the rounded
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeBreakdown {
    pub brokerage: Decimal,
    pub stt: Decimal,
    pub transaction_charges: Decimal,
    pub gst: Decimal,
    pub sebi_charges: Decimal,
    pub stamp_duty: Decimal,
    pub dp_charges: Decimal,
    pub total: Decimal,
}

impl ChargeBreakdown {
    /// The seven components in a fixed order, excluding `total`.
    pub fn components(&self) -> [Decimal; 7] {
        [
            self.brokerage,
            self.stt,
            self.transaction_charges,
            self.gst,
            self.sebi_charges,
            self.stamp_duty,
            self.dp_charges,
        ]
    }
}
