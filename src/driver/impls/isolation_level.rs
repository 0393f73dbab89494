use crate::driver::enums::isolation_level::IsolationLevel;
use std::fmt;

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsolationLevel::ReadUncommitted => write!(f, "READ UNCOMMITTED"),
            IsolationLevel::ReadCommitted => write!(f, "READ COMMITTED"),
            IsolationLevel::RepeatableRead => write!(f, "REPEATABLE READ"),
            IsolationLevel::Serializable => write!(f, "SERIALIZABLE"),
        }
    }
}

impl IsolationLevel {
    /// DB2 short form used in `WITH <level>` clauses.
    pub fn db2_clause(&self) -> &'static str {
        match self {
            IsolationLevel::ReadUncommitted => "UR",
            IsolationLevel::ReadCommitted => "CS",
            IsolationLevel::RepeatableRead => "RS",
            IsolationLevel::Serializable => "RR",
        }
    }

    pub fn set_transaction_sql(&self) -> String {
        format!("SET TRANSACTION ISOLATION LEVEL {}", self)
    }
}
