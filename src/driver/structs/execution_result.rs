use crate::driver::types::Row;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult {
    pub rows: Vec<Row>,
    pub affected_rows: u64,
}
