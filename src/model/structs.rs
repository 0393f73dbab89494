//! Model data structures.

/// A single model (table) definition.
pub mod model_definition;

/// A single property (column) definition.
pub mod property_definition;

/// Registry of model definitions by name.
pub mod model_registry;
