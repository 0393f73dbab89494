use crate::connector::errors::ConnectorError;
use crate::connector::structs::column_info::ColumnInfo;
use crate::connector::structs::discovery_options::DiscoveryOptions;
use crate::connector::structs::foreign_key_info::ForeignKeyInfo;
use crate::connector::structs::primary_key_info::PrimaryKeyInfo;
use crate::connector::structs::table_info::TableInfo;
use crate::model::structs::model_definition::ModelDefinition;
use async_trait::async_trait;

#[async_trait]
pub trait Discoverable: Send + Sync {
    async fn discover_model_definitions(&self, options: &DiscoveryOptions) -> Result<Vec<TableInfo>, ConnectorError>;

    async fn discover_model_properties(&self, table: &str, options: &DiscoveryOptions) -> Result<Vec<ColumnInfo>, ConnectorError>;

    async fn discover_primary_keys(&self, table: &str, options: &DiscoveryOptions) -> Result<Vec<PrimaryKeyInfo>, ConnectorError>;

    async fn discover_foreign_keys(&self, table: &str, options: &DiscoveryOptions) -> Result<Vec<ForeignKeyInfo>, ConnectorError>;

    /// Builds a model definition from a table's columns and primary key.
    async fn discover_schema(&self, table: &str, options: &DiscoveryOptions) -> Result<ModelDefinition, ConnectorError>;
}
