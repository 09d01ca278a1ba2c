pub mod defaults;
mod observability_config;
mod ranking_config;

pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, NewsboardResult};

/// Root configuration. Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsboardConfig {
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl NewsboardConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(input: &str) -> NewsboardResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> NewsboardResult<String> {
        let out = toml::to_string(self).map_err(|e| ConfigError::SerializeFailed {
            reason: e.to_string(),
        })?;
        Ok(out)
    }

    pub fn validate(&self) -> NewsboardResult<()> {
        self.ranking.validate()?;
        Ok(())
    }
}
