//! Driver trait definitions.

/// The execution primitive every driver implements.
pub mod executor;
