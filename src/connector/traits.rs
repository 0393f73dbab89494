//! Connector traits.

/// Core CRUD contract the ORM drives.
pub mod connector;

/// Schema migration capability.
pub mod migratable;

/// Catalog discovery capability.
pub mod discoverable;

/// Transaction capability.
pub mod transactional;
