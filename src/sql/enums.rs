//! Statement enumeration types.

/// Comparison operators accepted in where filters.
pub mod operator;

/// Ordering direction for `ORDER BY`.
pub mod order_direction;

/// SQL dialects the statement builder can render.
pub mod sql_dialect;

/// Where filter syntax tree.
pub mod where_clause;
