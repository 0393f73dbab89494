//! Connector enumerations.

/// Lifecycle of a connector-side transaction.
pub mod transaction_state;
