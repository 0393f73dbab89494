//! Implementation blocks for model types.

pub mod model_definition;

pub mod model_registry;

pub mod property_definition;

pub mod property_type;
