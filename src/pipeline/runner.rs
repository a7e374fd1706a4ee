use std::fmt::Debug;

use chrono::Local;
use log::{error, info};

use crate::conf::Config;
use crate::core::EtlError;
use crate::model::Table;

use super::extract::{SampleSource, Source};
use super::load::{CsvSink, LoadReport, render_key};
use super::transform::transform;

/// Builds the sample pipeline from `config` and runs it.
///
/// Setup failures (bad key template, unusable store) are logged by the same
/// handler as stage failures.
pub async fn run_from_config(
    config: &Config,
    key: Option<String>,
) -> Result<LoadReport, EtlError> {
    let pipeline = Pipeline::from_config(config, key).map_err(log_failure)?;
    pipeline.run().await
}

fn log_failure(e: EtlError) -> EtlError {
    error!("ETL pipeline failed: {e}");
    e
}

/// Runs extract -> transform -> load once, stopping at the first failure.
pub struct Pipeline<S: Source> {
    source: S,
    sink: CsvSink,
    key: String,
}

impl Pipeline<SampleSource> {
    /// Builds the sample pipeline. `key` replaces the rendered key template when given.
    pub fn from_config(config: &Config, key: Option<String>) -> Result<Self, EtlError> {
        let key = match key {
            Some(key) => key,
            None => render_key(&config.sink.key_template, &Local::now())?,
        };
        let sink = CsvSink::new(&config.sink)?;
        Ok(Self::new(SampleSource, sink, key))
    }
}

impl<S: Source> Pipeline<S> {
    pub fn new(source: S, sink: CsvSink, key: String) -> Self {
        Self { source, sink, key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Failures are logged here once and returned unchanged.
    pub async fn run(&self) -> Result<LoadReport, EtlError> {
        info!("Starting ETL pipeline...");
        let report = self.run_stages().await.map_err(log_failure)?;
        info!(
            store = report.store.as_str(), key = report.key.as_str(), rows = report.rows;
            "ETL pipeline completed."
        );
        Ok(report)
    }

    async fn run_stages(&self) -> Result<LoadReport, EtlError> {
        info!(source = self.source.name(); "Extracting data...");
        let raw = self.source.extract().await?;
        log_table("Extracted", &raw);

        info!("Transforming data...");
        let transformed = transform(raw)?;
        log_table("Transformed", &transformed);

        self.sink.load(&transformed, &self.key).await
    }
}

fn log_table<R: Debug>(stage: &str, table: &Table<R>) {
    info!(rows = table.len(); "{stage} data:");
    for row in table {
        info!("  {row:?}");
    }
}
