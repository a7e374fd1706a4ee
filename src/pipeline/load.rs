use std::fmt::{self, Write};
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, TimeZone};
use log::info;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutMode, PutPayload};

use crate::conf::SinkConfig;
use crate::core::EtlError;
use crate::model::SalesTable;

use super::store::{create_store, describe_store};

/// CSV header, in the field order of [`crate::model::SalesRecord`].
pub const CSV_HEADER: [&str; 5] = ["id", "name", "sales", "date", "sales_category"];

/// Outcome of a successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub store: String,
    pub key: String,
    pub bytes: usize,
    pub rows: usize,
}

/// Serializes a table to CSV. The header is written even when the table is empty.
pub fn write_csv(table: &SalesTable) -> Result<Vec<u8>, EtlError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in table {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| EtlError::SerializationError(e.to_string()))
}

/// Renders a strftime key template at the given instant.
pub fn render_key<Tz>(template: &str, at: &DateTime<Tz>) -> Result<String, EtlError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut key = String::new();
    write!(key, "{}", at.format(template)).map_err(|_| {
        EtlError::ConfigParsingError(format!("Invalid key template '{template}'"))
    })?;
    if key.is_empty() {
        return Err(EtlError::ConfigParsingError(
            "Key template renders to an empty key".to_string(),
        ));
    }
    Ok(key)
}

/// Uploads tables as CSV objects to a single object store.
pub struct CsvSink {
    store: Arc<dyn ObjectStore>,
    description: String,
    overwrite: bool,
}

impl CsvSink {
    pub fn new(config: &SinkConfig) -> Result<Self, EtlError> {
        let store = create_store(config)?;
        Ok(Self {
            store,
            description: describe_store(&config.store),
            overwrite: config.overwrite,
        })
    }

    /// Create from an existing store (useful for testing).
    pub fn with_store(store: Arc<dyn ObjectStore>, description: String, overwrite: bool) -> Self {
        Self {
            store,
            description,
            overwrite,
        }
    }

    pub async fn load(&self, table: &SalesTable, key: &str) -> Result<LoadReport, EtlError> {
        let path = ObjectPath::parse(key)
            .map_err(|e| EtlError::LoadError(format!("Invalid object key '{key}': {e}")))?;

        info!(
            store = self.description.as_str(), key = key;
            "Loading data to {}/{}", self.description, key
        );

        let body = Bytes::from(write_csv(table)?);
        let bytes = body.len();
        let mode = if self.overwrite {
            PutMode::Overwrite
        } else {
            PutMode::Create
        };

        self.store
            .put_opts(&path, PutPayload::from(body), mode.into())
            .await
            .map_err(|e| {
                EtlError::LoadError(format!(
                    "Upload to {}/{} failed: {}",
                    self.description, key, e
                ))
            })?;

        info!(
            bytes = bytes, rows = table.len();
            "Data successfully loaded to {}/{}", self.description, key
        );

        Ok(LoadReport {
            store: self.description.clone(),
            key: key.to_string(),
            bytes,
            rows: table.len(),
        })
    }
}
