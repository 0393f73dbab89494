use crate::config::structs::connection_settings::ConnectionSettings;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub datasource: ConnectionSettings,
}
