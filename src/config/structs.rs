//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure.
pub mod configuration;

/// DB2 for i data source settings (`[datasource]`).
pub mod connection_settings;
