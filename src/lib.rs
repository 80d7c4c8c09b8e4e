pub mod config;
pub mod endpoint;
pub mod error;
pub mod metrics;
pub mod refresh;
pub mod server_list;
pub mod source;

pub use config::Config;
pub use endpoint::Endpoint;
pub use error::{Result, ServerListError};
pub use crate::metrics::Metrics;
pub use refresh::Refresher;
pub use server_list::{order_by_priority, ServerList};
pub use source::{EndpointSource, FileSource, StaticSource};
