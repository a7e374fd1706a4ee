mod extract;
mod load;
mod runner;
mod store;
mod transform;

pub use extract::{SampleSource, Source};
pub use load::{CSV_HEADER, CsvSink, LoadReport, render_key, write_csv};
pub use runner::{Pipeline, run_from_config};
pub use store::{create_local_store, create_s3_store, create_store, describe_store};
pub use transform::{parse_date, transform};
