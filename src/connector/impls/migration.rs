use crate::connector::errors::ConnectorError;
use crate::connector::structs::db2_connector::Db2Connector;
use crate::connector::traits::migratable::Migratable;
use crate::driver::structs::execute_options::ExecuteOptions;
use crate::model::enums::property_type::PropertyType;
use crate::model::structs::model_definition::ModelDefinition;
use crate::model::structs::property_definition::PropertyDefinition;
use crate::sql::helpers;
use crate::sql::structs::statement::Statement;
use crate::sql::structs::statement_builder::StatementBuilder;
use async_trait::async_trait;
use futures_util::future::try_join_all;
use log::{debug, info};
use serde_json::Value;

const DEFAULT_VARCHAR_LENGTH: u32 = 512;
const IDENTITY: &str = "GENERATED BY DEFAULT AS IDENTITY (START WITH 1, INCREMENT BY 1)";

impl Db2Connector {
    /// DB2 for i column type for a property.
    pub fn column_data_type(property: &PropertyDefinition) -> String {
        match property.property_type {
            PropertyType::String => format!("VARCHAR({})", property.length.unwrap_or(DEFAULT_VARCHAR_LENGTH)),
            PropertyType::Number => match (property.precision, property.scale) {
                (Some(precision), scale) => format!("DECIMAL({},{})", precision, scale.unwrap_or(0)),
                (None, _) => String::from("DOUBLE"),
            },
            PropertyType::Integer if property.id => String::from("INTEGER"),
            PropertyType::Integer => String::from("BIGINT"),
            PropertyType::Boolean => String::from("SMALLINT"),
            PropertyType::Date => String::from("TIMESTAMP"),
            PropertyType::Object => String::from("CLOB"),
            PropertyType::Buffer => String::from("BLOB"),
        }
    }

    pub fn column_definition(model: &ModelDefinition, property: &PropertyDefinition) -> String {
        let is_id = model
            .id_property()
            .is_some_and(|id| id.name == property.name);
        let mut definition = format!(
            "{} {}",
            StatementBuilder::escape_name(property.column_name()),
            Self::column_data_type(property)
        );
        if is_id || property.required {
            definition.push_str(" NOT NULL");
        }
        if is_id && property.generated {
            definition.push(' ');
            definition.push_str(IDENTITY);
        }
        definition
    }

    pub fn build_create_table(&self, model: &ModelDefinition) -> String {
        let mut columns = model
            .properties
            .iter()
            .map(|property| Self::column_definition(model, property))
            .collect::<Vec<String>>();
        if let Some(id) = model.id_property() {
            columns.push(format!("PRIMARY KEY ({})", StatementBuilder::escape_name(id.column_name())));
        }
        format!("CREATE TABLE {} ({})", self.base.builder.table_name(model), columns.join(", "))
    }

    pub fn build_drop_table(&self, model: &ModelDefinition) -> String {
        format!("DROP TABLE {}", self.base.builder.table_name(model))
    }

    pub fn build_add_columns(&self, model: &ModelDefinition, existing: &[String]) -> Vec<String> {
        let table = self.base.builder.table_name(model);
        model
            .properties
            .iter()
            .filter(|property| {
                !existing
                    .iter()
                    .any(|column| column.eq_ignore_ascii_case(property.column_name()))
            })
            .map(|property| format!("ALTER TABLE {} ADD COLUMN {}", table, Self::column_definition(model, property)))
            .collect()
    }

    /// Catalog filter on table name and schema; the session's current schema when none is configured.
    fn catalog_filter(&self, model: &ModelDefinition) -> Statement {
        let mut params = vec![Value::from(model.table_name())];
        let schema = match model.schema.as_deref().or(self.base.builder.default_schema.as_deref()) {
            Some(schema) => {
                params.push(Value::from(schema));
                "TABLE_SCHEMA = ?"
            }
            None => "TABLE_SCHEMA = CURRENT SCHEMA",
        };
        Statement::with_params(format!("WHERE TABLE_NAME = ? AND {}", schema), params)
    }

    pub async fn table_exists(&self, model: &ModelDefinition) -> Result<bool, ConnectorError> {
        let mut statement = Statement::new("SELECT COUNT(*) AS \"cnt\" FROM QSYS2.SYSTABLES");
        statement.merge(self.catalog_filter(model));
        let result = self.base.execute_statement(&statement, &ExecuteOptions::default()).await?;
        let count = match result.first().and_then(|row| helpers::row_value(row, "cnt")) {
            Some(value) => helpers::count_value(value).ok_or_else(|| {
                ConnectorError::InvalidRow(format!("table count of {} is not a number: {}", model.name, value))
            })?,
            None => 0,
        };
        Ok(count > 0)
    }

    pub async fn existing_columns(&self, model: &ModelDefinition) -> Result<Vec<String>, ConnectorError> {
        let mut statement = Statement::new("SELECT COLUMN_NAME AS \"column\" FROM QSYS2.SYSCOLUMNS");
        statement.merge(self.catalog_filter(model));
        let result = self.base.execute_statement(&statement, &ExecuteOptions::default()).await?;
        Ok(result
            .rows
            .iter()
            .filter_map(|row| helpers::row_value(row, "column"))
            .filter_map(Value::as_str)
            .map(|column| column.trim_end().to_string())
            .collect())
    }

    async fn run_ddl(&self, sql: &str) -> Result<(), ConnectorError> {
        debug!("[MIGRATE] {}", sql);
        self.base.execute_sql(sql, &[], &ExecuteOptions::default()).await?;
        Ok(())
    }

    async fn migrate_model(&self, model: ModelDefinition) -> Result<(), ConnectorError> {
        if self.table_exists(&model).await? {
            self.run_ddl(&self.build_drop_table(&model)).await?;
        }
        self.run_ddl(&self.build_create_table(&model)).await?;
        info!("[MIGRATE] Created table for model {}", model.name);
        Ok(())
    }

    async fn update_model(&self, model: ModelDefinition) -> Result<(), ConnectorError> {
        if !self.table_exists(&model).await? {
            self.run_ddl(&self.build_create_table(&model)).await?;
            info!("[MIGRATE] Created table for model {}", model.name);
            return Ok(());
        }
        let existing = self.existing_columns(&model).await?;
        for sql in self.build_add_columns(&model, &existing) {
            self.run_ddl(&sql).await?;
        }
        Ok(())
    }

    async fn model_is_actual(&self, model: ModelDefinition) -> Result<bool, ConnectorError> {
        if !self.table_exists(&model).await? {
            return Ok(false);
        }
        let existing = self.existing_columns(&model).await?;
        Ok(self.build_add_columns(&model, &existing).is_empty())
    }
}

#[async_trait]
impl Migratable for Db2Connector {
    async fn automigrate(&self, models: &[String]) -> Result<(), ConnectorError> {
        let models = self.base.resolve_models(models)?;
        try_join_all(models.into_iter().map(|model| self.migrate_model(model))).await?;
        Ok(())
    }

    async fn autoupdate(&self, models: &[String]) -> Result<(), ConnectorError> {
        let models = self.base.resolve_models(models)?;
        try_join_all(models.into_iter().map(|model| self.update_model(model))).await?;
        Ok(())
    }

    async fn is_actual(&self, models: &[String]) -> Result<bool, ConnectorError> {
        let models = self.base.resolve_models(models)?;
        let actual = try_join_all(models.into_iter().map(|model| self.model_is_actual(model))).await?;
        Ok(actual.into_iter().all(|actual| actual))
    }
}
