use async_trait::async_trait;

use crate::core::EtlError;
use crate::model::{RawRecord, RawTable};

/// Produces the raw table a run starts from.
///
/// Implementations backed by a database or an API report failures as
/// [`EtlError::ExtractionError`].
#[async_trait]
pub trait Source: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn extract(&self) -> Result<RawTable, EtlError>;
}

/// Fixed four-row sales sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl SampleSource {
    pub fn rows() -> Vec<RawRecord> {
        vec![
            RawRecord::new(1, "Alice", Some(100.0), "2025-01-01"),
            RawRecord::new(2, "Bob", Some(150.0), "2025-02-01"),
            RawRecord::new(3, "Charlie", None, "2025-03-01"),
            RawRecord::new(4, "David", Some(200.0), "2025-04-01"),
        ]
    }
}

#[async_trait]
impl Source for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    async fn extract(&self) -> Result<RawTable, EtlError> {
        Ok(RawTable::new(Self::rows()))
    }
}
