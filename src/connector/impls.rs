//! Implementation blocks for connector types.

pub mod count_result;

pub mod data_source;

pub mod db2_connector;

/// `Discoverable` for the DB2 adapter (QSYS2 catalog).
pub mod discovery;

/// `Migratable` for the DB2 adapter.
pub mod migration;

pub mod sql_connector;

/// `Transactional` for the DB2 adapter.
pub mod transaction;

pub mod transaction_state;
