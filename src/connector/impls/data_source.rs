use crate::config::structs::connection_settings::ConnectionSettings;
use crate::connector::errors::ConnectorError;
use crate::connector::structs::data_source::DataSource;
use crate::connector::structs::db2_connector::Db2Connector;
use crate::connector::traits::connector::Connector;
use crate::driver::traits::executor::Executor;
use crate::model::structs::model_definition::ModelDefinition;
use crate::model::structs::model_registry::ModelRegistry;
use log::{debug, info};
use parking_lot::RwLock;
use std::sync::Arc;

impl DataSource {
    pub fn new(name: &str, settings: ConnectionSettings, driver: Arc<dyn Executor>) -> DataSource {
        DataSource {
            name: name.to_string(),
            settings,
            models: Arc::new(RwLock::new(ModelRegistry::new())),
            driver,
            connector: None,
        }
    }

    /// Data source backed by the ODBC driver.
    #[cfg(feature = "odbc")]
    pub fn from_settings(name: &str, settings: ConnectionSettings) -> DataSource {
        let driver = Arc::new(crate::driver::structs::odbc_driver::OdbcDriver::new(&settings));
        Self::new(name, settings, driver)
    }

    /// Registers a model; visible to an already attached connector as well.
    pub fn define(&self, definition: ModelDefinition) -> Option<ModelDefinition> {
        self.models.write().define(definition)
    }

    pub fn connector(&self) -> Result<Arc<Db2Connector>, ConnectorError> {
        self.connector
            .clone()
            .ok_or_else(|| ConnectorError::NotInitialized(self.name.clone()))
    }

    pub fn is_initialized(&self) -> bool {
        self.connector.is_some()
    }
}

/// Attaches a DB2 connector to `data_source`.
///
/// With `lazy_connect` set this returns without touching the database;
/// otherwise it connects before returning and a connection failure is
/// returned to the caller.
pub async fn initialize(data_source: &mut DataSource) -> Result<(), ConnectorError> {
    let connector = Arc::new(Db2Connector::with_registry(
        data_source.settings.clone(),
        data_source.driver.clone(),
        data_source.models.clone(),
    )?);
    data_source.connector = Some(connector.clone());

    if data_source.settings.lazy_connect {
        debug!("[DB2i] {} initialized, connecting lazily", data_source.name);
        return Ok(());
    }
    connector.connect().await?;
    info!("[DB2i] {} connected", data_source.name);
    Ok(())
}
