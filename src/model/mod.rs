//! Model definitions registered by the ORM.
//!
//! A model maps a name the ORM uses (`Customer`) onto a DB2 table and its
//! columns. The connector only needs a small part of the ORM's model metadata:
//! table and schema overrides, property to column mapping, property types for
//! value conversion and DDL, and which property is the identifier.

pub mod enums;
pub mod impls;
pub mod structs;
