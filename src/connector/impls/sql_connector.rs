use crate::config::structs::connection_settings::ConnectionSettings;
use crate::connector::errors::ConnectorError;
use crate::connector::structs::count_result::CountResult;
use crate::connector::structs::sql_connector::SqlConnector;
use crate::connector::traits::connector::Connector;
use crate::connector::types::Record;
use crate::driver::structs::execute_options::ExecuteOptions;
use crate::driver::structs::execution_result::ExecutionResult;
use crate::driver::traits::executor::Executor;
use crate::model::structs::model_definition::ModelDefinition;
use crate::model::structs::model_registry::ModelRegistry;
use crate::sql::enums::sql_dialect::SqlDialect;
use crate::sql::errors::StatementError;
use crate::sql::helpers;
use crate::sql::structs::filter::Filter;
use crate::sql::structs::statement::Statement;
use crate::sql::structs::statement_builder::StatementBuilder;
use crate::sql::structs::where_filter::Where;
use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

impl SqlConnector {
    pub fn new(
        name: &str,
        dialect: SqlDialect,
        settings: ConnectionSettings,
        driver: Arc<dyn Executor>,
        models: Arc<RwLock<ModelRegistry>>,
    ) -> SqlConnector {
        SqlConnector {
            name: name.to_string(),
            builder: StatementBuilder::new(dialect, settings.schema.clone()),
            settings,
            models,
            driver,
        }
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    pub fn builder(&self) -> &StatementBuilder {
        &self.builder
    }

    pub fn driver(&self) -> Arc<dyn Executor> {
        self.driver.clone()
    }

    pub fn models(&self) -> Arc<RwLock<ModelRegistry>> {
        self.models.clone()
    }

    pub fn define_model(&self, definition: ModelDefinition) -> Option<ModelDefinition> {
        self.models.write().define(definition)
    }

    /// Snapshot of a registered model definition.
    pub fn model(&self, model: &str) -> Result<ModelDefinition, StatementError> {
        self.models
            .read()
            .get(model)
            .cloned()
            .ok_or_else(|| StatementError::UnknownModel(model.to_string()))
    }

    /// Registered models named in `models`, or all of them when the slice is empty.
    pub fn resolve_models(&self, models: &[String]) -> Result<Vec<ModelDefinition>, StatementError> {
        if models.is_empty() {
            let registry = self.models.read();
            return Ok(registry
                .names()
                .iter()
                .filter_map(|name| registry.get(name).cloned())
                .collect());
        }
        models.iter().map(|name| self.model(name)).collect()
    }

    pub fn id_name(&self, model: &str) -> Result<String, ConnectorError> {
        Ok(self.builder.id_name(&self.model(model)?)?)
    }

    pub fn table_name(&self, model: &str) -> Result<String, ConnectorError> {
        Ok(self.builder.table_name(&self.model(model)?))
    }

    pub fn build_insert(&self, model: &str, data: &Record) -> Result<Statement, ConnectorError> {
        Ok(self.builder.build_insert(&self.model(model)?, data)?)
    }

    pub fn build_update(&self, model: &str, where_filter: &Where, data: &Record) -> Result<Statement, ConnectorError> {
        Ok(self.builder.build_update(&self.model(model)?, where_filter, data)?)
    }

    pub fn build_delete(&self, model: &str, where_filter: &Where) -> Result<Statement, ConnectorError> {
        Ok(self.builder.build_delete(&self.model(model)?, where_filter)?)
    }

    pub fn build_select(&self, model: &str, filter: &Filter) -> Result<Statement, ConnectorError> {
        Ok(self.builder.build_select(&self.model(model)?, filter)?)
    }

    pub fn build_count(&self, model: &str, where_filter: &Where) -> Result<Statement, ConnectorError> {
        Ok(self.builder.build_count(&self.model(model)?, where_filter)?)
    }

    pub fn build_where(&self, model: &str, where_filter: &Where) -> Result<Statement, ConnectorError> {
        Ok(self.builder.build_where(&self.model(model)?, where_filter)?)
    }

    pub async fn execute_statement(&self, statement: &Statement, options: &ExecuteOptions) -> Result<ExecutionResult, ConnectorError> {
        let sql = self.builder.render(statement);
        self.execute_sql(&sql, &statement.params, options).await
    }

    pub async fn execute_sql(&self, sql: &str, params: &[Value], options: &ExecuteOptions) -> Result<ExecutionResult, ConnectorError> {
        debug!("[{}] SQL: {} params: {:?}", self.builder.dialect.engine_name(), sql, params);
        Ok(self.driver.execute(sql, params, options).await?)
    }
}

#[async_trait]
impl Connector for SqlConnector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn connect(&self) -> Result<(), ConnectorError> {
        Ok(self.driver.connect().await?)
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        Ok(self.driver.disconnect().await?)
    }

    async fn ping(&self) -> Result<(), ConnectorError> {
        Ok(self.driver.ping().await?)
    }

    async fn create(&self, model: &str, data: &Record, options: &ExecuteOptions) -> Result<Value, ConnectorError> {
        let definition = self.model(model)?;
        let statement = self.builder.build_insert(&definition, data)?;
        let id = self.builder.id_name(&definition)?;
        let result = self.execute_statement(&statement, options).await?;
        let reported = result.first().and_then(|row| helpers::row_value(row, &id)).cloned();
        Ok(reported
            .or_else(|| {
                definition
                    .id_property()
                    .and_then(|property| data.get(&property.name))
                    .cloned()
            })
            .unwrap_or(Value::Null))
    }

    async fn update(&self, model: &str, where_filter: &Where, data: &Record, options: &ExecuteOptions) -> Result<CountResult, ConnectorError> {
        let statement = self.build_update(model, where_filter, data)?;
        let result = self.execute_statement(&statement, options).await?;
        Ok(CountResult::new(result.affected_rows))
    }

    async fn destroy_all(&self, model: &str, where_filter: &Where, options: &ExecuteOptions) -> Result<CountResult, ConnectorError> {
        let statement = self.build_delete(model, where_filter)?;
        let result = self.execute_statement(&statement, options).await?;
        Ok(CountResult::new(result.affected_rows))
    }

    async fn all(&self, model: &str, filter: &Filter, options: &ExecuteOptions) -> Result<Vec<Record>, ConnectorError> {
        let definition = self.model(model)?;
        let statement = self.builder.build_select(&definition, filter)?;
        let result = self.execute_statement(&statement, options).await?;
        Ok(result
            .rows
            .into_iter()
            .map(|row| self.builder.from_row(&definition, row))
            .collect())
    }

    async fn count(&self, model: &str, where_filter: &Where, options: &ExecuteOptions) -> Result<u64, ConnectorError> {
        let statement = self.build_count(model, where_filter)?;
        let result = self.execute_statement(&statement, options).await?;
        let value = result
            .first()
            .and_then(|row| helpers::row_value(row, "cnt"))
            .ok_or_else(|| ConnectorError::InvalidRow(format!("count of {} returned no \"cnt\" column", model)))?;
        helpers::count_value(value).ok_or_else(|| ConnectorError::InvalidRow(format!("count of {} is not a number: {}", model, value)))
    }

    async fn find_by_id(&self, model: &str, id: &Value, options: &ExecuteOptions) -> Result<Option<Record>, ConnectorError> {
        let definition = self.model(model)?;
        let id_property = definition
            .id_property()
            .ok_or_else(|| StatementError::MissingId(model.to_string()))?;
        let filter = Filter::new(Where::eq(&id_property.name, id.clone())).limit(1);
        Ok(self.all(model, &filter, options).await?.into_iter().next())
    }

    async fn execute(&self, sql: &str, params: &[Value], options: &ExecuteOptions) -> Result<ExecutionResult, ConnectorError> {
        self.execute_sql(sql, params, options).await
    }
}
