//! Execution primitive seam between the connector and a native DB2 driver.
//!
//! The connector never talks to the database itself. Every statement it
//! produces is handed to an [`Executor`](traits::executor::Executor)
//! implementation, which owns connection lifecycle, pooling, cancellation
//! and the translation of native failures into [`ExecutionError`](errors::ExecutionError).
//!
//! # Backends
//!
//! - **ODBC** (feature `odbc`): `OdbcDriver`, talking to DB2 for i through the
//!   IBM i Access ODBC driver or the DB2 CLI driver.
//! - Any other type implementing `Executor` can be plugged in, which is how
//!   the test suites drive the connector.

/// Driver enumerations (isolation levels).
pub mod enums;

/// Error type produced by drivers.
pub mod errors;

/// Implementation blocks for driver types.
pub mod impls;

/// Driver data structures (results, options, ODBC backend).
pub mod structs;

/// The `Executor` trait.
pub mod traits;

/// Row type aliases.
pub mod types;
