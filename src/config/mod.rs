//! Configuration management module.
//!
//! Loads, validates and saves the connector configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **datasource**: DB2 for i connection settings (host, port, database,
//!   credentials, default schema, raw DSN, pool sizing, lazy connect)
//!
//! Connection values can be overridden from the environment with `DB2_HOST`,
//! `DB2_PORT`, `DB2_DATABASE`, `DB2_USER`, `DB2_PASSWORD` and `DB2_SCHEMA`.
//!
//! # Example
//!
//! ```rust,ignore
//! use db2i_connector::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", true)?;
//! println!("{}", config.datasource.masked().connection_string());
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
