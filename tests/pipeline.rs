mod common;

use std::fs;

use object_store::ObjectStore;

use common::{SAMPLE_CSV, local_sink};
use salesetl::conf::Config;
use salesetl::core::EtlError;
use salesetl::model::{RawTable, SalesCategory};
use salesetl::pipeline::{Pipeline, SampleSource, Source, transform};

/// Full run against a local directory store.
#[tokio::test]
async fn test_pipeline_writes_expected_csv() {
    let (dir, sink, _reader) = local_sink(true);
    let pipeline = Pipeline::new(SampleSource, sink, "processed_data/run.csv".to_string());

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.rows, 4);
    assert_eq!(report.bytes, SAMPLE_CSV.len());
    let written = fs::read_to_string(dir.path().join("processed_data").join("run.csv")).unwrap();
    assert_eq!(written, SAMPLE_CSV);
}

#[tokio::test]
async fn test_pipeline_from_config_with_local_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let toml = format!(
        r#"
        [sink]
        key_template = "daily/%Y/sales.csv"

        [sink.store.local]
        path = "{}"
        "#,
        dir.path().to_str().unwrap()
    );
    let config = Config::from_str(&toml).unwrap();
    let pipeline = Pipeline::from_config(&config, None).unwrap();
    assert!(pipeline.key().starts_with("daily/"));

    let report = pipeline.run().await.unwrap();
    let written = fs::read_to_string(dir.path().join(&report.key)).unwrap();
    assert_eq!(written, SAMPLE_CSV);
}

#[tokio::test]
async fn test_row_count_preserved_across_stages() {
    let (_dir, sink, reader) = local_sink(true);
    let raw = SampleSource.extract().await.unwrap();
    let extracted = raw.len();

    let transformed = transform(raw).unwrap();
    assert_eq!(transformed.len(), extracted);

    sink.load(&transformed, "rows.csv").await.unwrap();
    let bytes = reader
        .get(&"rows.csv".into())
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    let mut csv = csv::Reader::from_reader(bytes.as_ref());
    assert_eq!(csv.records().count(), extracted);
}

#[tokio::test]
async fn test_transform_invariants_on_sample() {
    let transformed = transform(SampleSource.extract().await.unwrap()).unwrap();
    for record in &transformed {
        assert!(!record.sales.is_nan());
        assert_eq!(
            record.sales_category == SalesCategory::High,
            record.sales > 150.0
        );
    }
    let charlie = &transformed.rows()[2];
    assert_eq!(charlie.sales, 0.0);
    assert_eq!(charlie.sales_category, SalesCategory::Low);
}

#[tokio::test]
async fn test_transform_is_idempotent() {
    let once = transform(SampleSource.extract().await.unwrap()).unwrap();
    let twice = transform(RawTable::from(once.clone())).unwrap();
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_create_only_sink_keeps_existing_object() {
    let (dir, sink, _reader) = local_sink(false);
    fs::write(dir.path().join("taken.csv"), "previous").unwrap();
    let pipeline = Pipeline::new(SampleSource, sink, "taken.csv".to_string());

    let result = pipeline.run().await;

    assert!(matches!(result, Err(EtlError::LoadError(_))));
    assert_eq!(
        fs::read_to_string(dir.path().join("taken.csv")).unwrap(),
        "previous"
    );
}
