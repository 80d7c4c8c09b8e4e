use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Supplies freshly resolved endpoint lists to the server list.
#[async_trait]
pub trait EndpointSource: Send + Sync {
    async fn resolve(&self) -> Result<Vec<Endpoint>>;
}

/// A fixed set of endpoints.
pub struct StaticSource {
    endpoints: Vec<Endpoint>,
}

impl StaticSource {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoints())
    }
}

#[async_trait]
impl EndpointSource for StaticSource {
    async fn resolve(&self) -> Result<Vec<Endpoint>> {
        Ok(self.endpoints.clone())
    }
}

/// Re-reads a YAML config file on every resolve.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EndpointSource for FileSource {
    async fn resolve(&self) -> Result<Vec<Endpoint>> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(Config::from_yaml(&contents)?.endpoints())
    }
}
