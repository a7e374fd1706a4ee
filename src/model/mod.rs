mod record;
mod table;

pub use record::{DATE_FORMAT, HIGH_SALES_THRESHOLD, RawRecord, SalesCategory, SalesRecord};
pub use table::{RawTable, SalesTable, Table};
