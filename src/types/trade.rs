//! Trade input types — trade facts and recorded orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::enums::*;

// ---------------------------------------------------------------------------
// Trade Fact
// ---------------------------------------------------------------------------

/// The facts of one executed cash equity trade needed to price its charges.
///
/// Trade facts are assumed valid: quantity positive, price positive and on
/// the 0.05 tick. Use [`OrderInput::validate`](crate::validation::OrderInput::validate)
/// to build one from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeFact {
    /// Trading symbol. Opaque to the fee engine.
    pub symbol: String,
    pub quantity: u64,
    /// Price per share in INR.
    pub price: Decimal,
    pub side: TradeSide,
    pub broker: Broker,
    /// Squared off the same day. Defaults to delivery.
    #[serde(default, rename = "isIntraday")]
    pub intraday: bool,
}

impl TradeFact {
    /// Create a delivery trade fact.
    pub fn new(
        symbol: impl Into<String>,
        quantity: u64,
        price: Decimal,
        side: TradeSide,
        broker: Broker,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            price,
            side,
            broker,
            intraday: false,
        }
    }

    /// Mark this trade as intraday.
    pub fn intraday(mut self) -> Self {
        self.intraday = true;
        self
    }

    /// Price × quantity, at full precision.
    pub fn turnover(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    pub fn kind(&self) -> TradeKind {
        TradeKind::new(self.side, self.intraday)
    }
}

// ---------------------------------------------------------------------------
// Recorded Order
// ---------------------------------------------------------------------------

/// A trade as held by the order store: identity, ownership, and the facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedOrder {
    pub id: String,
    pub user_id: String,
    #[serde(flatten)]
    pub trade: TradeFact,
    pub executed_at: DateTime<Utc>,
}
