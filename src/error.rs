//! Error types for the `brokerage-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, BrokerageError>`.
//!
//! [`BrokerageError`] covers:
//! - **Unknown broker** — A broker identifier with no schedule in the registry
//! - **Empty input** — Aggregation requested over zero trades
//! - **Validation errors** — Malformed order input rejected before charging
//! - **Missing orders** — None of the requested orders belong to the user
//! - **JSON errors** — Schedule or order payloads that fail to deserialize
//! - **Store errors** — Failures reported by a persistence collaborator

/// All possible errors produced by the brokerage engine.
#[derive(Debug, thiserror::Error)]
pub enum BrokerageError {
    /// The broker identifier does not resolve to a fee schedule.
    #[error("Unknown broker: {0}")]
    UnknownBroker(String),

    /// Aggregation was requested over an empty set of trades.
    #[error("Cannot aggregate an empty set of trades")]
    EmptyInput,

    /// An order input failed validation.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending input field.
        field: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// No recorded orders matched the requested ids for this user.
    #[error("No orders found for these IDs")]
    OrdersNotFound,

    /// Failed to deserialize a JSON payload.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The persistence collaborator rejected or failed a write.
    #[error("Store error: {0}")]
    Store(String),
}

impl BrokerageError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BrokerageError>;
