use std::sync::Arc;

use object_store::ObjectStore;
use object_store::local::LocalFileSystem;
use tempfile::TempDir;

use salesetl::conf::LocalStoreConfig;
use salesetl::pipeline::{CsvSink, create_local_store};

/// Expected upload for the four sample rows.
pub const SAMPLE_CSV: &str = "id,name,sales,date,sales_category\n\
1,Alice,100.0,2025-01-01,Low\n\
2,Bob,150.0,2025-02-01,Low\n\
3,Charlie,0.0,2025-03-01,Low\n\
4,David,200.0,2025-04-01,High\n";

/// A CsvSink writing under a fresh temp dir, plus a store reading the same root.
pub fn local_sink(overwrite: bool) -> (TempDir, CsvSink, Arc<dyn ObjectStore>) {
    let dir = TempDir::new().unwrap();
    let config = LocalStoreConfig {
        path: dir.path().to_str().unwrap().to_string(),
    };
    let store = create_local_store(&config).unwrap();
    let sink = CsvSink::with_store(store, format!("file://{}", config.path), overwrite);
    let reader: Arc<dyn ObjectStore> =
        Arc::new(LocalFileSystem::new_with_prefix(dir.path()).unwrap());
    (dir, sink, reader)
}
