//! Statement data structures.

/// SQL text with its ordered parameters.
pub mod statement;

/// Limit/offset pair carried with select statements.
pub mod paging;

/// Parsed where filter.
pub mod where_filter;

/// Full query filter (where, paging, order, fields).
pub mod filter;

/// Builds statements for a model in a given dialect.
pub mod statement_builder;
