//! Shared enum types for brokers, trade sides, and trade kinds.
//!
//! Side variants use `SCREAMING_SNAKE_CASE` to match the JSON wire format of
//! recorded orders, so we suppress the Rust naming convention lint.
#![allow(non_camel_case_types)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrokerageError;

// ---------------------------------------------------------------------------
// Broker
// ---------------------------------------------------------------------------

/// A supported broker. Each variant has exactly one fee schedule in the
/// standard registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Broker {
    Zerodha,
    Groww,
}

impl Broker {
    /// Every supported broker, in declaration order.
    pub const ALL: [Broker; 2] = [Broker::Zerodha, Broker::Groww];

    /// The broker's display and wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Zerodha => "Zerodha",
            Self::Groww => "Groww",
        }
    }
}

impl fmt::Display for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Broker {
    type Err = BrokerageError;

    /// Parse a broker name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| BrokerageError::UnknownBroker(name.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Trade Side
// ---------------------------------------------------------------------------

/// Buy or sell side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    BUY,
    SELL,
}

// ---------------------------------------------------------------------------
// Trade Kind
// ---------------------------------------------------------------------------

/// The side × holding-period combination that selects which charges apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeKind {
    /// Buy leg held beyond the trading day.
    DeliveryBuy,
    /// Sell leg settled from the demat account.
    DeliverySell,
    /// Buy leg squared off the same day.
    IntradayBuy,
    /// Sell leg squared off the same day.
    IntradaySell,
}

impl TradeKind {
    /// Classify a trade by side and intraday flag.
    pub fn new(side: TradeSide, intraday: bool) -> Self {
        match (side, intraday) {
            (TradeSide::BUY, false) => Self::DeliveryBuy,
            (TradeSide::SELL, false) => Self::DeliverySell,
            (TradeSide::BUY, true) => Self::IntradayBuy,
            (TradeSide::SELL, true) => Self::IntradaySell,
        }
    }

    pub fn side(self) -> TradeSide {
        match self {
            Self::DeliveryBuy | Self::IntradayBuy => TradeSide::BUY,
            Self::DeliverySell | Self::IntradaySell => TradeSide::SELL,
        }
    }

    pub fn is_intraday(self) -> bool {
        matches!(self, Self::IntradayBuy | Self::IntradaySell)
    }
}
