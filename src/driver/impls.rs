//! Implementation blocks for driver types.

pub mod execution_result;

pub mod isolation_level;

#[cfg(feature = "odbc")]
pub mod odbc_driver;
