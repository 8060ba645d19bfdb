//! Order input validation.
//!
//! The charge calculator trusts its input. Callers that accept orders from
//! users run them through [`OrderInput::validate`] first, which enforces the
//! same bounds the order form does and yields a [`TradeFact`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::error::{BrokerageError, Result};
use crate::types::{Broker, TradeFact, TradeSide};

/// Untrusted order input as submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub symbol: String,
    /// Signed so that negative submissions can be rejected with a message.
    pub quantity: i64,
    pub price: Decimal,
    pub side: TradeSide,
    pub broker: Broker,
    #[serde(default, rename = "isIntraday")]
    pub intraday: bool,
}

impl OrderInput {
    /// Check every field and convert into a [`TradeFact`].
    ///
    /// The symbol is upper-cased before its character set is checked.
    pub fn validate(&self) -> Result<TradeFact> {
        let symbol = validate_symbol(&self.symbol)?;
        let quantity = validate_quantity(self.quantity)?;
        validate_price(self.price)?;

        Ok(TradeFact {
            symbol,
            quantity,
            price: self.price,
            side: self.side,
            broker: self.broker,
            intraday: self.intraday,
        })
    }
}

fn validate_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(BrokerageError::validation("symbol", "Stock symbol is required"));
    }
    if symbol.chars().count() > limits::MAX_SYMBOL_LEN {
        return Err(BrokerageError::validation("symbol", "Stock symbol too long"));
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '&')
    {
        return Err(BrokerageError::validation(
            "symbol",
            "Stock symbol must contain only uppercase letters, numbers, and &",
        ));
    }
    Ok(symbol)
}

fn validate_quantity(quantity: i64) -> Result<u64> {
    if quantity <= 0 {
        return Err(BrokerageError::validation("quantity", "Quantity must be positive"));
    }
    if quantity > limits::MAX_QUANTITY {
        return Err(BrokerageError::validation("quantity", "Quantity too large"));
    }
    Ok(quantity as u64)
}

fn validate_price(price: Decimal) -> Result<()> {
    if price <= Decimal::ZERO {
        return Err(BrokerageError::validation("price", "Price must be positive"));
    }
    if price > limits::MAX_PRICE {
        return Err(BrokerageError::validation("price", "Price too large"));
    }
    if !(price % limits::PRICE_TICK).is_zero() {
        return Err(BrokerageError::validation(
            "price",
            format!("Price must be in multiples of {}", limits::PRICE_TICK),
        ));
    }
    Ok(())
}

/// A calculation request must name at least one order.
pub fn validate_order_ids(order_ids: &[String]) -> Result<()> {
    if order_ids.is_empty() {
        return Err(BrokerageError::validation(
            "orderIds",
            "At least one order id is required",
        ));
    }
    if order_ids.iter().any(|id| id.trim().is_empty()) {
        return Err(BrokerageError::validation("orderIds", "Order ids must not be blank"));
    }
    Ok(())
}
