//! Connector structures.

/// Generic SQL connector the DB2 adapter builds on.
pub mod sql_connector;

/// DB2 for i dialect adapter.
pub mod db2_connector;

/// `{count}` result of update and delete operations.
pub mod count_result;

/// Open transaction handle with its state.
pub mod transaction;

/// Data source owning settings, models and the attached connector.
pub mod data_source;

/// Catalog discovery filters.
pub mod discovery_options;

/// Discovered table or view.
pub mod table_info;

/// Discovered column.
pub mod column_info;

/// Discovered primary key column.
pub mod primary_key_info;

/// Discovered foreign key column.
pub mod foreign_key_info;
