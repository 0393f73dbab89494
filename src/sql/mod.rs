//! Statement building.
//!
//! This is the generic SQL layer the DB2 connector sits on: it turns a model
//! definition plus ORM data (`Where` filters, record maps, paging) into
//! parameterized [`Statement`](structs::statement::Statement)s. Identifiers are
//! always double-quoted, values always travel as `?` parameters.
//!
//! Dialect differences (paging, vendor row-set wrappers) are confined to
//! [`SqlDialect`](enums::sql_dialect::SqlDialect) and [`helpers`].

pub mod enums;
pub mod errors;
pub mod helpers;
pub mod impls;
pub mod structs;
