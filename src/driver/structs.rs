//! Driver data structures.

/// Rows and affected-row count returned by one statement.
pub mod execution_result;

/// Per-call execution options.
pub mod execute_options;

/// Opaque handle to a driver-side transaction.
pub mod transaction_handle;

/// ODBC-backed driver.
#[cfg(feature = "odbc")]
pub mod odbc_driver;
