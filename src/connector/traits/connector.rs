use crate::connector::errors::ConnectorError;
use crate::connector::structs::count_result::CountResult;
use crate::connector::types::Record;
use crate::driver::structs::execute_options::ExecuteOptions;
use crate::driver::structs::execution_result::ExecutionResult;
use crate::sql::structs::filter::Filter;
use crate::sql::structs::where_filter::Where;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait Connector: Send + Sync {
    fn name(&self) -> &str;

    async fn connect(&self) -> Result<(), ConnectorError>;

    async fn disconnect(&self) -> Result<(), ConnectorError>;

    async fn ping(&self) -> Result<(), ConnectorError>;

    /// Inserts `data` and returns the identifier of the new instance.
    async fn create(&self, model: &str, data: &Record, options: &ExecuteOptions) -> Result<Value, ConnectorError>;

    async fn update(
        &self,
        model: &str,
        where_filter: &Where,
        data: &Record,
        options: &ExecuteOptions,
    ) -> Result<CountResult, ConnectorError>;

    async fn destroy_all(
        &self,
        model: &str,
        where_filter: &Where,
        options: &ExecuteOptions,
    ) -> Result<CountResult, ConnectorError>;

    async fn all(&self, model: &str, filter: &Filter, options: &ExecuteOptions) -> Result<Vec<Record>, ConnectorError>;

    async fn count(&self, model: &str, where_filter: &Where, options: &ExecuteOptions) -> Result<u64, ConnectorError>;

    async fn find_by_id(&self, model: &str, id: &Value, options: &ExecuteOptions) -> Result<Option<Record>, ConnectorError>;

    /// Execution primitive: runs `sql` with positional parameters.
    async fn execute(&self, sql: &str, params: &[Value], options: &ExecuteOptions) -> Result<ExecutionResult, ConnectorError>;
}
