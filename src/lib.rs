//! # DB2 for i connector
//!
//! A connector adapter that lets an ORM issue CRUD, migration, discovery and
//! transaction operations against DB2 for i (and other DB2-family databases)
//! through a pluggable native driver.
//!
//! ## Overview
//!
//! Control flows ORM -> [`Db2Connector`](connector::structs::db2_connector::Db2Connector)
//! -> [`SqlConnector`](connector::structs::sql_connector::SqlConnector) base ->
//! [`Executor`](driver::traits::executor::Executor) -> database. The adapter
//! itself contributes the DB2 row-set wrappers, so every mutation reports the
//! identifiers it touched in a single round trip:
//!
//! - `create`: `SELECT "<id>" FROM FINAL TABLE (<insert>)`
//! - `update`: `SELECT "<id>" FROM FINAL TABLE (<update>)` -> `{count}`
//! - `destroy_all`: `SELECT "<id>" FROM OLD TABLE (<delete>)` -> `{count}`
//!
//! ## Features
//!
//! - **Generic statement builders**: parameterized insert/update/delete/select/count with `?` markers
//! - **DB2 for i paging**: `OFFSET m ROWS FETCH FIRST n ROWS ONLY`, plus a rewrite for raw `LIMIT`/`OFFSET` SQL
//! - **Migration**: `automigrate`, `autoupdate`, `is_actual`
//! - **Discovery**: tables, columns, primary and foreign keys from the `QSYS2` catalog
//! - **Transactions**: `UR`, `CS`, `RS`, `RR` isolation
//! - **ODBC backend** (feature `odbc`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use db2i_connector::config::structs::configuration::Configuration;
//! use db2i_connector::connector::impls::data_source::initialize;
//! use db2i_connector::connector::structs::data_source::DataSource;
//!
//! let config = Configuration::load_from_file("config.toml", true)?;
//! db2i_connector::logging::setup_logging(&config)?;
//!
//! let mut data_source = DataSource::from_settings("db", config.datasource);
//! initialize(&mut data_source).await?;
//! ```

/// Configuration management module.
///
/// Handles loading, validating and saving `config.toml`, including the
/// `[datasource]` connection settings and their environment overrides.
pub mod config;

/// The connector adapter.
///
/// `Connector` CRUD contract, the generic `SqlConnector` base, the
/// `Db2Connector` dialect adapter, its migration, discovery and transaction
/// capabilities, and data source initialization.
pub mod connector;

/// Execution primitive seam.
///
/// The `Executor` trait every native driver implements, driver errors and
/// results, and the optional ODBC backend.
pub mod driver;

/// Process-wide log dispatch setup.
pub mod logging;

/// Model definitions and the model registry.
pub mod model;

/// Statement building, where filters and dialect helpers.
pub mod sql;
