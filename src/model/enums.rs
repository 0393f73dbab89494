//! Model enumeration types.

/// Property data types.
pub mod property_type;
