use crate::config::structs::connection_settings::ConnectionSettings;
use crate::driver::traits::executor::Executor;
use crate::model::structs::model_registry::ModelRegistry;
use crate::sql::structs::statement_builder::StatementBuilder;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Clone)]
pub struct SqlConnector {
    pub(crate) name: String,
    pub(crate) settings: ConnectionSettings,
    pub(crate) builder: StatementBuilder,
    pub(crate) models: Arc<RwLock<ModelRegistry>>,
    pub(crate) driver: Arc<dyn Executor>,
}
