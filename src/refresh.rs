use crate::config::RefreshConfig;
use crate::error::Result;
use crate::server_list::ServerList;
use crate::source::EndpointSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::{debug, warn};

/// Periodically pulls endpoints from a source into a server list.
pub struct Refresher {
    list: Arc<ServerList>,
    source: Box<dyn EndpointSource>,
    interval: Duration,
}

impl Refresher {
    pub fn new(list: Arc<ServerList>, source: Box<dyn EndpointSource>, interval: Duration) -> Self {
        Self {
            list,
            source,
            interval,
        }
    }

    pub fn from_config(
        list: Arc<ServerList>,
        source: Box<dyn EndpointSource>,
        config: &RefreshConfig,
    ) -> Self {
        Self::new(list, source, config.interval())
    }

    /// Resolves the source once and installs the result, returning the new
    /// list length. The current list is kept if the source fails.
    pub async fn refresh_once(&self) -> Result<usize> {
        let endpoints = self.source.resolve().await?;
        let count = endpoints.len();
        self.list.replace(endpoints);
        Ok(count)
    }

    pub async fn run(&self) {
        let mut ticker = time::interval(self.interval);

        loop {
            ticker.tick().await;
            match self.refresh_once().await {
                Ok(count) => debug!(count, "Endpoint refresh completed"),
                Err(e) => warn!("Endpoint refresh failed, keeping current list: {}", e),
            }
        }
    }
}
