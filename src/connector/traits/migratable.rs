use crate::connector::errors::ConnectorError;
use async_trait::async_trait;

/// An empty `models` slice means every registered model.
#[async_trait]
pub trait Migratable: Send + Sync {
    /// Drops and re-creates the tables of `models`. Existing data is lost.
    async fn automigrate(&self, models: &[String]) -> Result<(), ConnectorError>;

    /// Creates missing tables and adds missing columns, keeping data.
    async fn autoupdate(&self, models: &[String]) -> Result<(), ConnectorError>;

    /// Whether every table exists with all of its model's columns.
    async fn is_actual(&self, models: &[String]) -> Result<bool, ConnectorError>;
}
