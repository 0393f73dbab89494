use crate::config::structs::connection_settings::ConnectionSettings;
use crate::connector::errors::ConnectorError;
use crate::connector::structs::count_result::CountResult;
use crate::connector::structs::db2_connector::Db2Connector;
use crate::connector::structs::sql_connector::SqlConnector;
use crate::connector::traits::connector::Connector;
use crate::connector::types::Record;
use crate::driver::structs::execute_options::ExecuteOptions;
use crate::driver::structs::execution_result::ExecutionResult;
use crate::driver::traits::executor::Executor;
use crate::model::structs::model_definition::ModelDefinition;
use crate::model::structs::model_registry::ModelRegistry;
use crate::sql::enums::sql_dialect::SqlDialect;
use crate::sql::helpers;
use crate::sql::structs::filter::Filter;
use crate::sql::structs::where_filter::Where;
use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;

impl Db2Connector {
    pub fn new(settings: ConnectionSettings, driver: Arc<dyn Executor>) -> Result<Db2Connector, ConnectorError> {
        Self::with_registry(settings, driver, Arc::new(RwLock::new(ModelRegistry::new())))
    }

    /// Builds the adapter over a model registry shared with the data source. No I/O happens here.
    pub fn with_registry(
        settings: ConnectionSettings,
        driver: Arc<dyn Executor>,
        models: Arc<RwLock<ModelRegistry>>,
    ) -> Result<Db2Connector, ConnectorError> {
        debug!("[DB2i] constructor settings: {:?}", settings.masked());
        Ok(Db2Connector {
            base: SqlConnector::new("db2i", SqlDialect::db2i, settings, driver, models),
            limit_re: Regex::new(r"LIMIT (\d+)")?,
            offset_re: Regex::new(r"OFFSET (\d+)")?,
        })
    }

    /// Builds the adapter on the ODBC driver.
    #[cfg(feature = "odbc")]
    pub fn from_settings(settings: ConnectionSettings) -> Result<Db2Connector, ConnectorError> {
        let driver = Arc::new(crate::driver::structs::odbc_driver::OdbcDriver::new(&settings));
        Self::new(settings, driver)
    }

    pub fn base(&self) -> &SqlConnector {
        &self.base
    }

    pub fn settings(&self) -> &ConnectionSettings {
        self.base.settings()
    }

    pub fn define_model(&self, definition: ModelDefinition) -> Option<ModelDefinition> {
        self.base.define_model(definition)
    }

    /// Runs raw SQL, rewriting MySQL-style `LIMIT`/`OFFSET` into DB2 for i paging first.
    pub async fn execute_sql(&self, sql: &str, params: &[Value], options: &ExecuteOptions) -> Result<ExecutionResult, ConnectorError> {
        let sql = helpers::rewrite_paging(sql, &self.limit_re, &self.offset_re);
        self.base.execute_sql(&sql, params, options).await
    }
}

#[async_trait]
impl Connector for Db2Connector {
    fn name(&self) -> &str {
        self.base.name()
    }

    async fn connect(&self) -> Result<(), ConnectorError> {
        self.base.connect().await
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        self.base.disconnect().await
    }

    async fn ping(&self) -> Result<(), ConnectorError> {
        self.base.ping().await
    }

    async fn create(&self, model: &str, data: &Record, options: &ExecuteOptions) -> Result<Value, ConnectorError> {
        let statement = self.base.build_insert(model, data)?;
        let id = self.base.id_name(model)?;
        let sql = helpers::select_from_final_table(&id, &statement.sql);
        let result = self.base.execute_sql(&sql, &statement.params, options).await?;
        result
            .first()
            .and_then(|row| helpers::row_value(row, &id))
            .cloned()
            .ok_or_else(|| ConnectorError::MissingIdentifier(model.to_string()))
    }

    async fn update(&self, model: &str, where_filter: &Where, data: &Record, options: &ExecuteOptions) -> Result<CountResult, ConnectorError> {
        let statement = self.base.build_update(model, where_filter, data)?;
        let id = self.base.id_name(model)?;
        let sql = helpers::select_from_final_table(&id, &statement.sql);
        let result = self.base.execute_sql(&sql, &statement.params, options).await?;
        Ok(CountResult::from(result.len()))
    }

    async fn destroy_all(&self, model: &str, where_filter: &Where, options: &ExecuteOptions) -> Result<CountResult, ConnectorError> {
        let statement = self.base.build_delete(model, where_filter)?;
        let id = self.base.id_name(model)?;
        let sql = helpers::select_from_old_table(&id, &statement.sql);
        let result = self.base.execute_sql(&sql, &statement.params, options).await?;
        Ok(CountResult::from(result.len()))
    }

    async fn all(&self, model: &str, filter: &Filter, options: &ExecuteOptions) -> Result<Vec<Record>, ConnectorError> {
        self.base.all(model, filter, options).await
    }

    async fn count(&self, model: &str, where_filter: &Where, options: &ExecuteOptions) -> Result<u64, ConnectorError> {
        self.base.count(model, where_filter, options).await
    }

    async fn find_by_id(&self, model: &str, id: &Value, options: &ExecuteOptions) -> Result<Option<Record>, ConnectorError> {
        self.base.find_by_id(model, id, options).await
    }

    async fn execute(&self, sql: &str, params: &[Value], options: &ExecuteOptions) -> Result<ExecutionResult, ConnectorError> {
        self.base.execute(sql, params, options).await
    }
}
