use chrono::NaiveDate;

use crate::core::EtlError;
use crate::model::{DATE_FORMAT, RawRecord, RawTable, SalesCategory, SalesRecord, SalesTable};

/// Cleans a raw table: missing sales become 0, dates are parsed, and
/// `sales_category` is derived from sales.
///
/// The first unparseable date fails the whole table. Row order and count are kept.
pub fn transform(table: RawTable) -> Result<SalesTable, EtlError> {
    table.into_iter().map(clean_record).collect()
}

fn clean_record(raw: RawRecord) -> Result<SalesRecord, EtlError> {
    let sales = fill_sales(raw.sales);
    let date = parse_date(raw.id, &raw.date)?;
    Ok(SalesRecord {
        id: raw.id,
        name: raw.name,
        sales,
        date,
        sales_category: SalesCategory::from_sales(sales),
    })
}

// NaN counts as missing.
fn fill_sales(sales: Option<f64>) -> f64 {
    match sales {
        Some(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

pub fn parse_date(id: i64, value: &str) -> Result<NaiveDate, EtlError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        EtlError::ParseError(format!(
            "row {id}: cannot parse date '{value}' as YYYY-MM-DD: {e}"
        ))
    })
}
