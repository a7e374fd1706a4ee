use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Calendar date format accepted from sources and written to CSV.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sales strictly above this value are `High`.
pub const HIGH_SALES_THRESHOLD: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SalesCategory {
    High,
    Low,
}

impl SalesCategory {
    pub fn from_sales(sales: f64) -> Self {
        if sales > HIGH_SALES_THRESHOLD {
            SalesCategory::High
        } else {
            SalesCategory::Low
        }
    }
}

/// A row as produced by a source, before cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub id: i64,
    pub name: String,
    pub sales: Option<f64>,
    pub date: String,
}

impl RawRecord {
    pub fn new(id: i64, name: &str, sales: Option<f64>, date: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            sales,
            date: date.to_string(),
        }
    }
}

/// A cleaned row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    pub id: i64,
    pub name: String,
    pub sales: f64,
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub sales_category: SalesCategory,
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

impl From<SalesRecord> for RawRecord {
    fn from(record: SalesRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            sales: Some(record.sales),
            date: record.date.format(DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundary_is_exclusive() {
        assert_eq!(SalesCategory::from_sales(150.0), SalesCategory::Low);
        assert_eq!(SalesCategory::from_sales(150.5), SalesCategory::High);
        assert_eq!(SalesCategory::from_sales(-1.0), SalesCategory::Low);
    }

    #[test]
    fn test_lowering_keeps_values() {
        let record = SalesRecord {
            id: 7,
            name: "Eve".to_string(),
            sales: 42.5,
            date: NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
            sales_category: SalesCategory::Low,
        };
        let raw = RawRecord::from(record);
        assert_eq!(raw, RawRecord::new(7, "Eve", Some(42.5), "2025-05-09"));
    }
}
