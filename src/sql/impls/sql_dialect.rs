use crate::sql::enums::sql_dialect::SqlDialect;
use std::fmt;

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlDialect::ansi => write!(f, "ansi"),
            SqlDialect::db2i => write!(f, "db2i"),
        }
    }
}

impl SqlDialect {
    /// Paging suffix without leading space; empty when neither bound is set.
    pub fn paging_clause(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        match self {
            SqlDialect::ansi => match (limit, offset) {
                (Some(limit), Some(offset)) => format!("LIMIT {} OFFSET {}", limit, offset),
                (Some(limit), None) => format!("LIMIT {}", limit),
                (None, Some(offset)) => format!("OFFSET {}", offset),
                (None, None) => String::new(),
            },
            SqlDialect::db2i => match (limit, offset) {
                (Some(limit), Some(offset)) => format!("OFFSET {} ROWS FETCH FIRST {} ROWS ONLY", offset, limit),
                (Some(limit), None) => format!("FETCH FIRST {} ROWS ONLY", limit),
                (None, Some(offset)) => format!("OFFSET {} ROWS", offset),
                (None, None) => String::new(),
            },
        }
    }

    pub fn engine_name(&self) -> &'static str {
        match self {
            SqlDialect::ansi => "SQL",
            SqlDialect::db2i => "DB2i",
        }
    }
}
