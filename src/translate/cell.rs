use super::date::to_spreadsheet_epoch;
use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use google_sheets4::api::{CellData, ExtendedValue, RowData};
use once_cell::sync::Lazy;
use regex::Regex;

// Unanchored: any text containing a YYYY-MM-DD group is treated as a date.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date pattern must compile"));

/// A single value destined for one spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Free text. Reclassified as a date when it contains a `YYYY-MM-DD` group.
    Text(String),
    /// Text written as-is, never reclassified.
    PlainText(String),
    Number(f64),
    Boolean(bool),
    /// Date or date-time text, always written as a date serial.
    Date(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Text,
    Number,
    Boolean,
    Date,
}

/// The value actually sent to the service. Dates have already been turned
/// into serial numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum SerializedCell {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl CellValue {
    /// Type a raw text field: `true`/`false` become booleans, finite numbers
    /// become numbers, anything else is text. Zero-padded digits such as
    /// `00123` stay text so identifiers keep their leading zeros.
    pub fn parse_loose(field: &str) -> Self {
        let trimmed = field.trim();

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        let digits = trimmed.trim_start_matches(['-', '+']);
        let zero_padded = digits.len() > 1
            && digits.starts_with('0')
            && digits.as_bytes()[1].is_ascii_digit();
        if zero_padded {
            return CellValue::Text(field.to_string());
        }

        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => CellValue::Number(number),
            _ => CellValue::Text(field.to_string()),
        }
    }
}

pub fn classify(value: &CellValue) -> CellType {
    match value {
        CellValue::Text(text) if DATE_PATTERN.is_match(text) => CellType::Date,
        CellValue::Text(_) | CellValue::PlainText(_) => CellType::Text,
        CellValue::Number(_) => CellType::Number,
        CellValue::Boolean(_) => CellType::Boolean,
        CellValue::Date(_) => CellType::Date,
    }
}

pub fn serialize_cell(value: &CellValue) -> Result<SerializedCell> {
    let serialized = match value {
        CellValue::Number(number) => SerializedCell::Number(*number),
        CellValue::Boolean(flag) => SerializedCell::Boolean(*flag),
        CellValue::Text(text) | CellValue::PlainText(text) | CellValue::Date(text) => {
            match classify(value) {
                CellType::Date => SerializedCell::Number(to_spreadsheet_epoch(text)?),
                _ => SerializedCell::Text(text.clone()),
            }
        }
    };

    Ok(serialized)
}

/// Translate one row into the `RowData` fragment used by `appendCells`.
pub fn serialize_row(row: &[CellValue]) -> Result<RowData> {
    let values = row
        .iter()
        .map(|value| serialize_cell(value).map(CellData::from))
        .collect::<Result<Vec<_>>>()?;

    Ok(RowData {
        values: Some(values),
    })
}

pub fn serialize_rows(rows: &[Vec<CellValue>]) -> Result<Vec<RowData>> {
    rows.iter().map(|row| serialize_row(row)).collect()
}

impl From<SerializedCell> for CellData {
    fn from(cell: SerializedCell) -> Self {
        let value = match cell {
            SerializedCell::Text(text) => ExtendedValue {
                string_value: Some(text),
                ..Default::default()
            },
            SerializedCell::Number(number) => ExtendedValue {
                number_value: Some(number),
                ..Default::default()
            },
            SerializedCell::Boolean(flag) => ExtendedValue {
                bool_value: Some(flag),
                ..Default::default()
            },
        };

        CellData {
            user_entered_value: Some(value),
            ..Default::default()
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        CellValue::Number(number)
    }
}

impl From<i32> for CellValue {
    fn from(number: i32) -> Self {
        CellValue::Number(number.into())
    }
}

impl From<u32> for CellValue {
    fn from(number: u32) -> Self {
        CellValue::Number(number.into())
    }
}

/// Values beyond 2^53 lose precision, as any spreadsheet number does.
impl From<i64> for CellValue {
    fn from(number: i64) -> Self {
        CellValue::Number(number as f64)
    }
}

impl From<bool> for CellValue {
    fn from(flag: bool) -> Self {
        CellValue::Boolean(flag)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(date: NaiveDate) -> Self {
        CellValue::Date(date.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(datetime: NaiveDateTime) -> Self {
        CellValue::Date(datetime.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(datetime: DateTime<Utc>) -> Self {
        CellValue::Date(datetime.to_rfc3339())
    }
}

impl TryFrom<serde_json::Value> for CellValue {
    type Error = AppError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(text) => Ok(CellValue::Text(text)),
            serde_json::Value::Bool(flag) => Ok(CellValue::Boolean(flag)),
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(CellValue::Number)
                .ok_or_else(|| AppError::InvalidCell(format!("{} is not representable", number))),
            other => Err(AppError::InvalidCell(format!(
                "expected a string, number or boolean, got {}",
                other
            ))),
        }
    }
}
