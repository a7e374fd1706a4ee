use std::sync::Arc;
use std::time::Duration;

use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::{ClientOptions, ObjectStore, RetryConfig};

use crate::conf::{LocalStoreConfig, S3StoreConfig, SinkConfig, StoreConfig};
use crate::core::EtlError;

/// Creates a LocalFileSystem ObjectStore rooted at `config.path`, creating the directory if needed.
pub fn create_local_store(config: &LocalStoreConfig) -> Result<Arc<dyn ObjectStore>, EtlError> {
    std::fs::create_dir_all(&config.path)?;
    let store = LocalFileSystem::new_with_prefix(&config.path).map_err(|e| {
        EtlError::LoadError(format!(
            "Failed to open local store at '{}': {}",
            config.path, e
        ))
    })?;
    Ok(Arc::new(store))
}

/// Creates an S3 ObjectStore from S3StoreConfig.
///
/// Credentials come from the usual `AWS_*` environment variables. Retries are
/// disabled so a failed upload surfaces immediately.
pub fn create_s3_store(
    config: &S3StoreConfig,
    timeout: Duration,
) -> Result<Arc<dyn ObjectStore>, EtlError> {
    let mut builder = AmazonS3Builder::from_env()
        .with_bucket_name(&config.bucket)
        .with_region(&config.region)
        .with_retry(RetryConfig {
            max_retries: 0,
            ..Default::default()
        })
        .with_client_options(ClientOptions::new().with_timeout(timeout));

    // Optional custom endpoint (for MinIO, LocalStack, etc.)
    if let Some(endpoint) = &config.endpoint {
        builder = builder.with_endpoint(endpoint);
        if endpoint.starts_with("http://") {
            builder = builder.with_allow_http(true);
        }
    }

    let store = builder.build().map_err(|e| {
        EtlError::LoadError(format!(
            "Failed to create S3 store for bucket '{}': {}",
            config.bucket, e
        ))
    })?;

    Ok(Arc::new(store))
}

pub fn create_store(config: &SinkConfig) -> Result<Arc<dyn ObjectStore>, EtlError> {
    match &config.store {
        StoreConfig::S3(s3) => create_s3_store(s3, config.timeout),
        StoreConfig::Local(local) => create_local_store(local),
    }
}

/// Human-readable location of the store, e.g. `s3://bucket`.
pub fn describe_store(config: &StoreConfig) -> String {
    match config {
        StoreConfig::S3(s3) => format!("s3://{}", s3.bucket),
        StoreConfig::Local(local) => format!("file://{}", local.path),
    }
}
