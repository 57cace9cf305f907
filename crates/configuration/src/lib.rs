// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{ApiSettings, Config, DisplaySettings, Environment};

/// Loads the application configuration from the `config.toml` file.
///
/// Environment variables prefixed with `TRADEBOOK_` override file values
/// (e.g. `TRADEBOOK_API__ENVIRONMENT=production`), so deployments can switch
/// record stores without editing the file.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .add_source(config::Environment::with_prefix("TRADEBOOK").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    if config.display.trades_per_page == 0 {
        return Err(ConfigError::ValidationError(
            "display.trades_per_page must be at least 1".to_string(),
        ));
    }

    Ok(config)
}
