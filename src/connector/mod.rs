//! DB2 for i connector.
//!
//! [`Db2Connector`](structs::db2_connector::Db2Connector) is a thin dialect
//! adapter over the generic [`SqlConnector`](structs::sql_connector::SqlConnector)
//! base. It overrides three operations so the database echoes back what the
//! statement touched in the same round trip:
//!
//! - `create` runs `SELECT "<id>" FROM FINAL TABLE (<insert>)` and returns the new identifier
//! - `update` runs `SELECT "<id>" FROM FINAL TABLE (<update>)` and returns `{count}`
//! - `destroy_all` runs `SELECT "<id>" FROM OLD TABLE (<delete>)` and returns `{count}`
//!
//! Everything else is inherited from the base. Migration, discovery and
//! transactions are separate capability traits implemented for the adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use db2i_connector::connector::structs::data_source::DataSource;
//! use db2i_connector::connector::impls::data_source::initialize;
//!
//! let mut data_source = DataSource::new("db", settings, driver);
//! initialize(&mut data_source).await?;
//! let connector = data_source.connector()?;
//! let id = connector.create("Customer", &record, &ExecuteOptions::default()).await?;
//! ```

/// Connector enumerations.
pub mod enums;

/// Connector error type.
pub mod errors;

/// Implementation blocks for connector types and capability traits.
pub mod impls;

/// Connector data structures.
pub mod structs;

/// CRUD and capability traits.
pub mod traits;

/// Record type alias.
pub mod types;

#[cfg(test)]
mod tests;
