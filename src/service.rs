//! Calculation service — the request flow around the fee engine.
//!
//! A calculation request names a user and a list of order ids. The service:
//!
//! 1. checks that at least one id was given,
//! 2. fetches the user's matching orders from an [`OrderSource`],
//! 3. prices each order with its broker's schedule,
//! 4. aggregates the priced trades into a [`CalculationSummary`](crate::types::CalculationSummary),
//! 5. wraps the summary in a [`CalculationRecord`] and hands it to a
//!    [`CalculationSink`], returning whatever the sink stored.
//!
//! Storage and retrieval are collaborators behind traits. In-memory
//! implementations are provided for embedding and tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::aggregator::aggregate;
use crate::calculator::ChargeCalculator;
use crate::error::{BrokerageError, Result};
use crate::registry::FeeScheduleRegistry;
use crate::types::{CalculationRecord, RecordedOrder};
use crate::validation::validate_order_ids;

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// Supplies recorded orders owned by a user.
pub trait OrderSource {
    /// Return the user's orders matching `order_ids`, in request order.
    ///
    /// Ids that do not exist or belong to another user are skipped. An id
    /// requested twice is returned twice.
    fn orders_for_user(&self, user_id: &str, order_ids: &[String]) -> Result<Vec<RecordedOrder>>;
}

/// Persists finished calculations.
pub trait CalculationSink {
    /// Store a record and return it as stored.
    fn store(&self, record: CalculationRecord) -> Result<CalculationRecord>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Runs calculation requests against a registry and two collaborators.
#[derive(Debug)]
pub struct CalculationService<'a, S, K> {
    registry: &'a FeeScheduleRegistry,
    orders: S,
    sink: K,
}

impl<'a, S: OrderSource, K: CalculationSink> CalculationService<'a, S, K> {
    pub fn new(registry: &'a FeeScheduleRegistry, orders: S, sink: K) -> Self {
        Self {
            registry,
            orders,
            sink,
        }
    }

    /// Compute, record, and return the P&L of the given orders.
    ///
    /// Fails with [`BrokerageError::Validation`] for an empty id list,
    /// [`BrokerageError::OrdersNotFound`] when none of the ids match the
    /// user's orders, and [`BrokerageError::UnknownBroker`] if an order's
    /// broker has no schedule.
    pub fn calculate(&self, user_id: &str, order_ids: &[String]) -> Result<CalculationRecord> {
        validate_order_ids(order_ids)?;

        let orders = self.orders.orders_for_user(user_id, order_ids)?;
        if orders.is_empty() {
            tracing::warn!(user_id, requested = order_ids.len(), "no orders found");
            return Err(BrokerageError::OrdersNotFound);
        }

        let ids: Vec<String> = orders.iter().map(|o| o.id.clone()).collect();
        let calculator = ChargeCalculator::new(self.registry);
        let priced = calculator.charge_all(orders.into_iter().map(|o| o.trade))?;
        let summary = aggregate(&priced)?;

        let record = self.sink.store(CalculationRecord::new(user_id, ids, summary))?;
        tracing::info!(
            id = %record.id,
            user_id,
            trades = summary.trade_count,
            net_pl = %summary.net_pl,
            "calculation created"
        );
        Ok(record)
    }

    pub fn orders(&self) -> &S {
        &self.orders
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

impl<T: OrderSource + ?Sized> OrderSource for &T {
    fn orders_for_user(&self, user_id: &str, order_ids: &[String]) -> Result<Vec<RecordedOrder>> {
        (**self).orders_for_user(user_id, order_ids)
    }
}

impl<T: CalculationSink + ?Sized> CalculationSink for &T {
    fn store(&self, record: CalculationRecord) -> Result<CalculationRecord> {
        (**self).store(record)
    }
}

// ---------------------------------------------------------------------------
// In-memory collaborators
// ---------------------------------------------------------------------------

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| BrokerageError::Store("lock poisoned".to_owned()))
}

/// Order store held in memory, keyed by order id.
#[derive(Debug, Default)]
pub struct InMemoryOrderBook {
    orders: Mutex<HashMap<String, RecordedOrder>>,
}

impl InMemoryOrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an order, replacing any previous order with the same id.
    pub fn insert(&self, order: RecordedOrder) -> Result<()> {
        lock(&self.orders)?.insert(order.id.clone(), order);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.orders.lock().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderSource for InMemoryOrderBook {
    fn orders_for_user(&self, user_id: &str, order_ids: &[String]) -> Result<Vec<RecordedOrder>> {
        let orders = lock(&self.orders)?;
        Ok(order_ids
            .iter()
            .filter_map(|id| orders.get(id))
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// Calculation store held in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCalculationStore {
    records: Mutex<Vec<CalculationRecord>>,
}

impl InMemoryCalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calculations created by a user, oldest first.
    pub fn for_user(&self, user_id: &str) -> Result<Vec<CalculationRecord>> {
        Ok(lock(&self.records)?
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

impl CalculationSink for InMemoryCalculationStore {
    fn store(&self, record: CalculationRecord) -> Result<CalculationRecord> {
        lock(&self.records)?.push(record.clone());
        Ok(record)
    }
}
