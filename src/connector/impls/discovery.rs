use crate::connector::errors::ConnectorError;
use crate::connector::structs::column_info::ColumnInfo;
use crate::connector::structs::db2_connector::Db2Connector;
use crate::connector::structs::discovery_options::DiscoveryOptions;
use crate::connector::structs::foreign_key_info::ForeignKeyInfo;
use crate::connector::structs::primary_key_info::PrimaryKeyInfo;
use crate::connector::structs::table_info::TableInfo;
use crate::connector::traits::discoverable::Discoverable;
use crate::driver::structs::execute_options::ExecuteOptions;
use crate::model::enums::property_type::PropertyType;
use crate::model::structs::model_definition::ModelDefinition;
use crate::model::structs::property_definition::PropertyDefinition;
use crate::sql::structs::paging::Paging;
use crate::sql::structs::statement::Statement;
use async_trait::async_trait;
use futures_util::future::try_join;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

impl Db2Connector {
    pub fn build_query_tables(&self, options: &DiscoveryOptions) -> Statement {
        let types = if options.views { "'T','P','V','L'" } else { "'T','P'" };
        let mut sql = format!(
            "SELECT TABLE_NAME AS \"name\", TABLE_SCHEMA AS \"owner\", \
             CASE WHEN TABLE_TYPE IN ('V','L') THEN 'view' ELSE 'table' END AS \"type\" \
             FROM QSYS2.SYSTABLES WHERE TABLE_TYPE IN ({})",
            types
        );
        let mut params = Vec::new();
        if let Some(owner) = &options.owner {
            sql.push_str(" AND TABLE_SCHEMA = ?");
            params.push(Value::from(owner.as_str()));
        }
        sql.push_str(" ORDER BY TABLE_SCHEMA, TABLE_NAME");
        let mut statement = Statement::with_params(sql, params);
        if options.limit.is_some() || options.offset.is_some() {
            statement.paging = Some(Paging {
                limit: options.limit,
                offset: options.offset,
            });
        }
        statement
    }

    pub fn build_query_columns(&self, table: &str, options: &DiscoveryOptions) -> Statement {
        let mut statement = Statement::new(
            "SELECT TABLE_SCHEMA AS \"owner\", TABLE_NAME AS \"tableName\", COLUMN_NAME AS \"columnName\", \
             DATA_TYPE AS \"dataType\", LENGTH AS \"dataLength\", NUMERIC_PRECISION AS \"dataPrecision\", \
             NUMERIC_SCALE AS \"dataScale\", IS_NULLABLE AS \"nullable\" \
             FROM QSYS2.SYSCOLUMNS",
        );
        statement.merge(Self::table_filter("", table, options));
        statement.merge(Statement::new("ORDER BY ORDINAL_POSITION"));
        statement
    }

    pub fn build_query_primary_keys(&self, table: &str, options: &DiscoveryOptions) -> Statement {
        let mut statement = Statement::new(
            "SELECT K.TABLE_SCHEMA AS \"owner\", K.TABLE_NAME AS \"tableName\", K.COLUMN_NAME AS \"columnName\", \
             K.COLUMN_POSITION AS \"keySeq\", K.CONSTRAINT_NAME AS \"pkName\" \
             FROM QSYS2.SYSKEYCST K \
             JOIN QSYS2.SYSCST C ON C.CONSTRAINT_SCHEMA = K.CONSTRAINT_SCHEMA AND C.CONSTRAINT_NAME = K.CONSTRAINT_NAME",
        );
        statement.merge(Self::table_filter("K.", table, options));
        statement.sql.push_str(" AND C.CONSTRAINT_TYPE = 'PRIMARY KEY'");
        statement.merge(Statement::new("ORDER BY K.COLUMN_POSITION"));
        statement
    }

    pub fn build_query_foreign_keys(&self, table: &str, options: &DiscoveryOptions) -> Statement {
        let mut statement = Statement::new(
            "SELECT FK.TABLE_SCHEMA AS \"fkOwner\", R.CONSTRAINT_NAME AS \"fkName\", FK.TABLE_NAME AS \"fkTableName\", \
             FK.COLUMN_NAME AS \"fkColumnName\", FK.COLUMN_POSITION AS \"keySeq\", PK.TABLE_SCHEMA AS \"pkOwner\", \
             R.UNIQUE_CONSTRAINT_NAME AS \"pkName\", PK.TABLE_NAME AS \"pkTableName\", PK.COLUMN_NAME AS \"pkColumnName\" \
             FROM QSYS2.SYSREFCST R \
             JOIN QSYS2.SYSKEYCST FK ON FK.CONSTRAINT_SCHEMA = R.CONSTRAINT_SCHEMA AND FK.CONSTRAINT_NAME = R.CONSTRAINT_NAME \
             JOIN QSYS2.SYSKEYCST PK ON PK.CONSTRAINT_SCHEMA = R.UNIQUE_CONSTRAINT_SCHEMA \
             AND PK.CONSTRAINT_NAME = R.UNIQUE_CONSTRAINT_NAME AND PK.COLUMN_POSITION = FK.COLUMN_POSITION",
        );
        statement.merge(Self::table_filter("FK.", table, options));
        statement.merge(Statement::new("ORDER BY FK.COLUMN_POSITION"));
        statement
    }

    fn table_filter(alias: &str, table: &str, options: &DiscoveryOptions) -> Statement {
        let mut statement = Statement::with_params(
            format!("WHERE {}TABLE_NAME = ?", alias),
            vec![Value::from(table)],
        );
        if let Some(owner) = &options.owner {
            statement.sql.push_str(&format!(" AND {}TABLE_SCHEMA = ?", alias));
            statement.params.push(Value::from(owner.as_str()));
        }
        statement
    }

    async fn query_catalog<T: DeserializeOwned>(&self, statement: &Statement) -> Result<Vec<T>, ConnectorError> {
        debug!("[DISCOVER] {}", statement.sql);
        let result = self.base.execute_statement(statement, &ExecuteOptions::default()).await?;
        result
            .rows
            .into_iter()
            .map(|row| serde_json::from_value(Value::Object(row)).map_err(|e| ConnectorError::InvalidRow(e.to_string())))
            .collect()
    }

    /// Model definition for a table from its catalog columns and primary key columns.
    pub fn build_model_definition(table: &str, columns: &[ColumnInfo], primary_keys: &[PrimaryKeyInfo]) -> ModelDefinition {
        let mut definition = ModelDefinition::new(table).with_table(table);
        if let Some(owner) = columns.first().map(|column| column.owner.trim_end()) {
            definition = definition.with_schema(owner);
        }
        for column in columns {
            let column_name = column.column_name.trim_end();
            let property_type = PropertyType::from_db2_type(&column.data_type);
            let mut property = PropertyDefinition::new(column_name, property_type).column(column_name);
            match property_type {
                PropertyType::String => {
                    if let Some(length) = column.data_length.and_then(|length| u32::try_from(length).ok()) {
                        property = property.length(length);
                    }
                }
                PropertyType::Number => {
                    if let (Some(precision), Some(scale)) = (column.data_precision, column.data_scale) {
                        if let (Ok(precision), Ok(scale)) = (u8::try_from(precision), u8::try_from(scale)) {
                            property = property.precision(precision, scale);
                        }
                    }
                }
                _ => {}
            }
            if column.nullable.trim().eq_ignore_ascii_case("N") {
                property = property.required();
            }
            if primary_keys
                .iter()
                .any(|key| key.column_name.trim_end() == column_name)
            {
                property = property.id();
            }
            definition = definition.with_property(property);
        }
        definition
    }
}

#[async_trait]
impl Discoverable for Db2Connector {
    async fn discover_model_definitions(&self, options: &DiscoveryOptions) -> Result<Vec<TableInfo>, ConnectorError> {
        self.query_catalog(&self.build_query_tables(options)).await
    }

    async fn discover_model_properties(&self, table: &str, options: &DiscoveryOptions) -> Result<Vec<ColumnInfo>, ConnectorError> {
        self.query_catalog(&self.build_query_columns(table, options)).await
    }

    async fn discover_primary_keys(&self, table: &str, options: &DiscoveryOptions) -> Result<Vec<PrimaryKeyInfo>, ConnectorError> {
        self.query_catalog(&self.build_query_primary_keys(table, options)).await
    }

    async fn discover_foreign_keys(&self, table: &str, options: &DiscoveryOptions) -> Result<Vec<ForeignKeyInfo>, ConnectorError> {
        self.query_catalog(&self.build_query_foreign_keys(table, options)).await
    }

    async fn discover_schema(&self, table: &str, options: &DiscoveryOptions) -> Result<ModelDefinition, ConnectorError> {
        let (columns, primary_keys) = try_join(
            self.discover_model_properties(table, options),
            self.discover_primary_keys(table, options),
        )
        .await?;
        Ok(Self::build_model_definition(table, &columns, &primary_keys))
    }
}
