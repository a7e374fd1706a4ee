mod config;
mod sink;

pub use config::{Config, ENV_PREFIX};
pub use sink::{LocalStoreConfig, S3StoreConfig, SinkConfig, StoreConfig};
