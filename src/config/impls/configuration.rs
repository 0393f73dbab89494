use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::connection_settings::ConnectionSettings;
use log::{info, warn};
use regex::Regex;
use std::fs::File;
use std::io::Write;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            datasource: ConnectionSettings::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => match Self::load(data.as_slice()) {
                Ok(cfg) => Ok(cfg),
                Err(e) => Err(ConfigurationError::ParseError(e)),
            },
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => match file.write_all(data.as_ref()) {
                Ok(_) => Ok(()),
                Err(e) => Err(ConfigurationError::IOError(e)),
            },
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads `path`, applies environment overrides and validates the result.
    ///
    /// With `create` set, a missing or unreadable file is replaced by the
    /// default configuration, which is then used.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let mut config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                if !create {
                    return Err(error);
                }
                warn!("[CONFIG] No config file found or corrupt ({}), creating {}", error, path);
                let config = Configuration::init();
                Self::save_from_config(path, &config)?;
                config
            }
        };

        config.datasource.apply_env_overrides()?;
        info!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }

        let datasource = &self.datasource;
        if datasource.connector != "db2i" {
            return Err(ConfigurationError::ValidationError(format!(
                "unsupported connector '{}'",
                datasource.connector
            )));
        }
        if datasource.max_pool_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("max_pool_size must be at least 1")));
        }
        if let Some(schema) = &datasource.schema {
            Self::validate_value("[DATASOURCE] schema", schema, r"^[A-Za-z_@#$][A-Za-z0-9_@#$]{0,127}$")?;
        }

        // A raw DSN carries its own connection details.
        if datasource.dsn.as_ref().is_some_and(|dsn| !dsn.trim().is_empty()) {
            return Ok(());
        }
        Self::validate_value("[DATASOURCE] host", &datasource.host, r"^[A-Za-z0-9][A-Za-z0-9.\-]{0,252}$")?;
        Self::validate_value("[DATASOURCE] database", &datasource.database, r"^[A-Za-z_@#$][A-Za-z0-9_@#$]{0,17}$")?;
        if datasource.port == 0 {
            return Err(ConfigurationError::ValidationError(String::from("port must not be 0")));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{} has an invalid pattern: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }
}
