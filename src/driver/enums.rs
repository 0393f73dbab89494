//! Driver enumeration types.

/// Transaction isolation levels understood by DB2.
pub mod isolation_level;
