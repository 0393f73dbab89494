use crate::driver::enums::isolation_level::IsolationLevel;
use crate::driver::errors::ExecutionError;
use crate::driver::structs::execute_options::ExecuteOptions;
use crate::driver::structs::execution_result::ExecutionResult;
use crate::driver::structs::transaction_handle::TransactionHandle;
use async_trait::async_trait;
use serde_json::Value;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Executor: Send + Sync {
    async fn connect(&self) -> Result<(), ExecutionError>;

    async fn disconnect(&self) -> Result<(), ExecutionError>;

    async fn ping(&self) -> Result<(), ExecutionError>;

    /// Submits `sql` with positional `params` (`?` markers) and returns the rows it produced.
    async fn execute(
        &self,
        sql: &str,
        params: &[Value],
        options: &ExecuteOptions,
    ) -> Result<ExecutionResult, ExecutionError>;

    async fn begin(&self, isolation: IsolationLevel) -> Result<TransactionHandle, ExecutionError>;

    async fn commit(&self, transaction: TransactionHandle) -> Result<(), ExecutionError>;

    async fn rollback(&self, transaction: TransactionHandle) -> Result<(), ExecutionError>;
}
