use serde_json::{
    Map,
    Value
};

/// A single result row, column name to value, in the order the driver returned the columns.
pub type Row = Map<String, Value>;
