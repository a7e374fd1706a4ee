use crate::{
    conf::SinkConfig,
    core::EtlError::{self, ConfigParsingError},
};
use config::{Config as CConfig, Environment, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `SALESETL_SINK__OVERWRITE=false`.
pub const ENV_PREFIX: &str = "SALESETL";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub sink: SinkConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, EtlError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }

    /// Reads the optional TOML file, then applies `SALESETL_*` environment overrides.
    pub fn load(path: Option<&str>) -> Result<Config, EtlError> {
        let mut builder = CConfig::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::new(path, FileFormat::Toml).required(true));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }
}
