use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    /// The record-store base URL for the configured environment.
    pub fn api_base_url(&self) -> &str {
        match self.api.environment {
            Environment::Development => &self.api.development_url,
            Environment::Production => &self.api.production_url,
        }
    }
}

/// Which record-store deployment the application talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Connection settings for the external record store.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Selects which of the two base URLs is active.
    #[serde(default)]
    pub environment: Environment,
    /// Local API during development (e.g. "http://localhost:3000/api").
    pub development_url: String,
    /// The hosted API everywhere else.
    pub production_url: String,
}

/// Presentation settings owned by the caller, not the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// Fixed page size for the trade history view.
    #[serde(default = "default_trades_per_page")]
    pub trades_per_page: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            trades_per_page: default_trades_per_page(),
        }
    }
}

fn default_trades_per_page() -> usize {
    10
}
