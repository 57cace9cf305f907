use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from config.toml: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),
}
