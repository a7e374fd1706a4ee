use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct S3StoreConfig {
    pub bucket: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "S3StoreConfig::default_region")]
    pub region: String,
}

impl S3StoreConfig {
    pub fn default_region() -> String {
        String::from("us-east-1")
    }

    pub fn default_bucket() -> String {
        String::from("my-data-engineering-bucket")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocalStoreConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub enum StoreConfig {
    #[serde(rename = "s3")]
    S3(S3StoreConfig),
    #[serde(rename = "local")]
    Local(LocalStoreConfig),
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::S3(S3StoreConfig {
            bucket: S3StoreConfig::default_bucket(),
            endpoint: None,
            region: S3StoreConfig::default_region(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SinkConfig {
    #[serde(default)]
    pub store: StoreConfig,
    /// strftime template, rendered in local time once per run.
    #[serde(default = "SinkConfig::default_key_template")]
    pub key_template: String,
    /// When false, uploads are create-only and an existing key fails the load.
    #[serde(default = "SinkConfig::default_overwrite")]
    pub overwrite: bool,
    #[serde(with = "humantime_serde", default = "SinkConfig::default_timeout")]
    pub timeout: Duration,
}

impl SinkConfig {
    fn default_key_template() -> String {
        String::from("processed_data/processed_data_%Y%m%d_%H%M%S.csv")
    }

    fn default_overwrite() -> bool {
        true
    }

    fn default_timeout() -> Duration {
        Duration::from_secs(30)
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            key_template: Self::default_key_template(),
            overwrite: Self::default_overwrite(),
            timeout: Self::default_timeout(),
        }
    }
}
