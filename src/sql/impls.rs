//! Implementation blocks for statement types.

pub mod filter;

pub mod operator;

pub mod order_direction;

pub mod sql_dialect;

pub mod statement;

pub mod statement_builder;

pub mod where_filter;
