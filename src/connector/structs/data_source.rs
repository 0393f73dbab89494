use crate::config::structs::connection_settings::ConnectionSettings;
use crate::connector::structs::db2_connector::Db2Connector;
use crate::driver::traits::executor::Executor;
use crate::model::structs::model_registry::ModelRegistry;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct DataSource {
    pub name: String,
    pub settings: ConnectionSettings,
    pub(crate) models: Arc<RwLock<ModelRegistry>>,
    pub(crate) driver: Arc<dyn Executor>,
    pub(crate) connector: Option<Arc<Db2Connector>>,
}
