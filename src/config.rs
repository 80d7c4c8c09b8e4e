use crate::endpoint::Endpoint;
use crate::error::{Result, ServerListError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_REFRESH_INTERVAL_SECONDS: u64 = 30;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub endpoints: Vec<EndpointConfig>,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub priority: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshConfig {
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
}

fn default_interval_seconds() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECONDS
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_REFRESH_INTERVAL_SECONDS,
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (index, endpoint) in self.endpoints.iter().enumerate() {
            if endpoint.name.trim().is_empty() {
                return Err(ServerListError::ConfigError(format!(
                    "endpoint #{} has an empty name",
                    index
                )));
            }
            if endpoint.address.trim().is_empty() {
                return Err(ServerListError::ConfigError(format!(
                    "endpoint {} has an empty address",
                    endpoint.name
                )));
            }
        }

        if self.refresh.interval_seconds == 0 {
            return Err(ServerListError::ConfigError(
                "refresh interval must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Converts the configured entries into endpoints, in file order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.endpoints
            .iter()
            .map(|ec| Endpoint::new(ec.name.clone(), ec.address.clone(), ec.priority))
            .collect()
    }
}
