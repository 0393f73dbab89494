use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::connection_settings::ConnectionSettings;

const MASK: &str = "********";

impl Default for ConnectionSettings {
    fn default() -> Self {
        ConnectionSettings {
            connector: String::from("db2i"),
            dsn: None,
            driver: String::from("DB2"),
            host: String::from("localhost"),
            port: 50000,
            database: String::from("SAMPLE"),
            username: String::new(),
            password: String::new(),
            schema: None,
            max_pool_size: 10,
            connect_timeout: 30,
            lazy_connect: false,
        }
    }
}

impl ConnectionSettings {
    /// ODBC connection string in the `DRIVER={DB2};DATABASE=...;HOSTNAME=...` form.
    pub fn connection_string(&self) -> String {
        if let Some(dsn) = self.dsn.as_ref().filter(|dsn| !dsn.trim().is_empty()) {
            return dsn.clone();
        }

        let mut connection = format!(
            "DRIVER={{{}}};DATABASE={};HOSTNAME={};UID={};PWD={};PORT={};PROTOCOL=TCPIP",
            self.driver.replace('}', "}}"),
            connection_value(&self.database),
            connection_value(&self.host),
            connection_value(&self.username),
            connection_value(&self.password),
            self.port
        );
        if let Some(schema) = self.schema.as_ref().filter(|schema| !schema.is_empty()) {
            connection.push_str(&format!(";CurrentSchema={}", connection_value(schema)));
        }
        if self.connect_timeout > 0 {
            connection.push_str(&format!(";ConnectTimeout={}", self.connect_timeout));
        }
        connection
    }

    /// Copy that is safe to log: the password and any `PWD=` in the DSN are masked.
    pub fn masked(&self) -> ConnectionSettings {
        let mut masked = self.clone();
        if !masked.password.is_empty() {
            masked.password = MASK.to_string();
        }
        masked.dsn = self.dsn.as_ref().map(|dsn| {
            dsn.split(';')
                .map(|part| match part.split_once('=') {
                    Some((key, _)) if is_password_key(key) => format!("{}={}", key, MASK),
                    _ => part.to_string(),
                })
                .collect::<Vec<String>>()
                .join(";")
        });
        masked
    }

    /// Applies `DB2_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigurationError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("DB2_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("DB2_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigurationError::ValidationError(format!("DB2_PORT is not a valid port: {}", port)))?;
        }
        if let Some(database) = lookup("DB2_DATABASE") {
            self.database = database;
        }
        if let Some(username) = lookup("DB2_USER") {
            self.username = username;
        }
        if let Some(password) = lookup("DB2_PASSWORD") {
            self.password = password;
        }
        if let Some(schema) = lookup("DB2_SCHEMA") {
            self.schema = Some(schema).filter(|schema| !schema.is_empty());
        }
        Ok(())
    }
}

fn is_password_key(key: &str) -> bool {
    let key = key.trim();
    key.eq_ignore_ascii_case("PWD") || key.eq_ignore_ascii_case("PASSWORD")
}

/// Braces a connection string value holding `;`, `{` or `}` so it cannot start another keyword.
/// A `}` inside braces is written twice.
pub fn connection_value(value: &str) -> String {
    if value.contains([';', '{', '}']) {
        format!("{{{}}}", value.replace('}', "}}"))
    } else {
        value.to_string()
    }
}
