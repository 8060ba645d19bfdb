//! Fee schedule registry.
//!
//! The [`FeeScheduleRegistry`] maps each [`Broker`] to its [`BrokerSchedule`].
//! It is an ordinary immutable value: build it once at startup (from the
//! published rate cards or from a JSON file) and share it by reference or
//! `Arc` across any number of threads.
//!
//! ```
//! use brokerage_rs::registry::FeeScheduleRegistry;
//! use brokerage_rs::types::Broker;
//!
//! let registry = FeeScheduleRegistry::standard();
//! let zerodha = registry.resolve(Broker::Zerodha).unwrap();
//! assert_eq!(zerodha.dp_charges.to_string(), "15.93");
//! ```

use std::collections::BTreeMap;

use crate::constants::{groww, zerodha};
use crate::error::{BrokerageError, Result};
use crate::types::{Broker, BrokerSchedule};

/// Immutable broker → fee schedule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeScheduleRegistry {
    schedules: BTreeMap<Broker, BrokerSchedule>,
}

impl FeeScheduleRegistry {
    /// Build a registry from explicit `(broker, schedule)` entries.
    ///
    /// A later entry for the same broker replaces an earlier one. Brokers
    /// without an entry fail to [`resolve`](Self::resolve).
    pub fn new(entries: impl IntoIterator<Item = (Broker, BrokerSchedule)>) -> Self {
        Self {
            schedules: entries.into_iter().collect(),
        }
    }

    /// The published rate cards for every supported broker.
    pub fn standard() -> Self {
        Self::new([
            (
                Broker::Zerodha,
                BrokerSchedule {
                    delivery_buy_rate: zerodha::DELIVERY_BUY,
                    delivery_sell_rate: zerodha::DELIVERY_SELL,
                    intraday_rate: zerodha::INTRADAY,
                    stt_rate: zerodha::STT,
                    transaction_charge_rate: zerodha::TRANSACTION,
                    gst_rate: zerodha::GST,
                    sebi_rate: zerodha::SEBI,
                    stamp_duty_rate: zerodha::STAMP_DUTY,
                    dp_charges: zerodha::DP_FLAT,
                },
            ),
            (
                Broker::Groww,
                BrokerSchedule {
                    delivery_buy_rate: groww::DELIVERY_BUY,
                    delivery_sell_rate: groww::DELIVERY_SELL,
                    intraday_rate: groww::INTRADAY,
                    stt_rate: groww::STT,
                    transaction_charge_rate: groww::TRANSACTION,
                    gst_rate: groww::GST,
                    sebi_rate: groww::SEBI,
                    stamp_duty_rate: groww::STAMP_DUTY,
                    dp_charges: groww::DP_FLAT,
                },
            ),
        ])
    }

    /// Load a registry from a JSON object keyed by broker name.
    ///
    /// ```json
    /// { "Zerodha": { "deliveryBuyRate": "0", "deliverySellRate": "0.1", ... } }
    /// ```
    ///
    /// Fails with [`BrokerageError::UnknownBroker`] if a key does not name a
    /// supported broker.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, BrokerSchedule> = serde_json::from_str(json)?;
        let mut schedules = BTreeMap::new();
        for (name, schedule) in raw {
            schedules.insert(name.parse::<Broker>()?, schedule);
        }
        tracing::debug!(brokers = schedules.len(), "loaded fee schedules from JSON");
        Ok(Self { schedules })
    }

    /// Look up the schedule for a broker.
    pub fn resolve(&self, broker: Broker) -> Result<&BrokerSchedule> {
        self.schedules
            .get(&broker)
            .ok_or_else(|| BrokerageError::UnknownBroker(broker.to_string()))
    }

    /// Parse a broker name and look up its schedule.
    pub fn resolve_name(&self, name: &str) -> Result<&BrokerSchedule> {
        self.resolve(name.parse()?)
    }

    /// Brokers that have a schedule, in stable order.
    pub fn brokers(&self) -> impl Iterator<Item = Broker> + '_ {
        self.schedules.keys().copied()
    }
}

impl Default for FeeScheduleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
