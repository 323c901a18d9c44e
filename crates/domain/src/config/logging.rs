use super::errors::ConfigError;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if LOG_LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::Validation(format!(
                "Unknown log level '{}', expected one of {}",
                self.level,
                LOG_LEVELS.join(", ")
            )))
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
