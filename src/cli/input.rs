use sheet_writer::error::{AppError, Result};
use sheet_writer::translate::CellValue;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load rows from a `.json` array of arrays or a header-less `.csv` file.
pub(crate) fn read_rows(path: &Path) -> Result<Vec<Vec<CellValue>>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json_rows(&fs::read_to_string(path)?),
        Some("csv") => parse_csv_rows(fs::File::open(path)?),
        _ => Err(AppError::Config(format!(
            "Unsupported rows file {:?}: expected .json or .csv",
            path
        ))),
    }
}

pub(crate) fn parse_loose_values(fields: &[String]) -> Vec<CellValue> {
    fields.iter().map(|f| CellValue::parse_loose(f)).collect()
}

fn parse_json_rows(contents: &str) -> Result<Vec<Vec<CellValue>>> {
    let raw: Vec<Vec<serde_json::Value>> = serde_json::from_str(contents)?;

    raw.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            row.into_iter()
                .map(CellValue::try_from)
                .collect::<Result<Vec<_>>>()
                .map_err(|e| match e {
                    AppError::InvalidCell(message) => {
                        AppError::InvalidCell(format!("row {}: {}", idx + 1, message))
                    }
                    other => other,
                })
        })
        .collect()
}

fn parse_csv_rows<R: Read>(reader: R) -> Result<Vec<Vec<CellValue>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::parse_loose).collect());
    }

    Ok(rows)
}
