use serde::{Deserialize, Serialize};

/// Settings handed to the connector when a data source is initialized.
///
/// When `dsn` is set it is used verbatim as the ODBC connection string and the
/// individual connection fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConnectionSettings {
    pub connector: String,
    pub dsn: Option<String>,
    pub driver: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub schema: Option<String>,
    pub max_pool_size: u32,
    /// Seconds; `0` leaves the driver default.
    pub connect_timeout: u64,
    pub lazy_connect: bool,
}
