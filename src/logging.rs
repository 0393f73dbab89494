use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

pub fn log_level_filter(level: &str) -> Result<log::LevelFilter, ConfigurationError> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(ConfigurationError::ValidationError(format!(
            "Unknown log level encountered: '{}'",
            level
        ))),
    }
}

/// Installs the process-wide logger. Can only succeed once per process.
pub fn setup_logging(config: &Configuration) -> Result<(), ConfigurationError> {
    let level = log_level_filter(config.log_level.as_str())?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| ConfigurationError::LoggingError(e.to_string()))?;
    info!("logging initialized.");
    Ok(())
}
