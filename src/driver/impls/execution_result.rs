use crate::driver::structs::execution_result::ExecutionResult;
use crate::driver::types::Row;

impl ExecutionResult {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let affected_rows = rows.len() as u64;
        Self { rows, affected_rows }
    }

    pub fn affected(affected_rows: u64) -> Self {
        Self { rows: Vec::new(), affected_rows }
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
