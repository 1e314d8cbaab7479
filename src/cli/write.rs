use crate::cli::input::{parse_loose_values, read_rows};
use indicatif::ProgressStyle;
use sheet_writer::config::Config;
use sheet_writer::error::{AppError, Result};
use sheet_writer::sheets::{SheetOperations, SheetsClient};
use sheet_writer::translate::{CellValue, serialize_rows};
use std::path::Path;
use tracing::{Span, info, instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

pub async fn header(tab_id: i32, values: &[String]) -> Result<()> {
    let config = Config::load()?;
    let client = SheetsClient::connect(&config.google).await?;

    client
        .add_header(tab_id, &parse_loose_values(values))
        .await?;

    info!(url = config.google.spreadsheet_url(), "Header added");

    Ok(())
}

pub async fn rows(tab_id: i32, file: &Path, batch_size: u32) -> Result<()> {
    let rows = read_rows(file)?;
    if rows.is_empty() {
        info!(file = ?file, "No rows to append");
        return Ok(());
    }

    let config = Config::load()?;
    let client = SheetsClient::connect(&config.google).await?;

    append_in_batches(&client, tab_id, &rows, batch_size as usize).await?;

    info!(
        rows = rows.len(),
        url = config.google.spreadsheet_url(),
        "Rows appended"
    );

    Ok(())
}

pub async fn format(tab_id: i32, column: u16, formats: &[String]) -> Result<()> {
    let config = Config::load()?;
    let client = SheetsClient::connect(&config.google).await?;

    let formats: Vec<&str> = formats.iter().map(String::as_str).collect();
    client.change_format(tab_id, column, &formats).await?;

    info!(url = config.google.spreadsheet_url(), "Format changed");

    Ok(())
}

/// Append rows one chunk per request, in file order. Every row is checked
/// before the first request, so a bad cell leaves the sheet untouched.
#[instrument(name = "Appending rows", skip_all)]
async fn append_in_batches<SC>(
    client: &SC,
    tab_id: i32,
    rows: &[Vec<CellValue>],
    batch_size: usize,
) -> Result<()>
where
    SC: SheetOperations + Sync,
{
    serialize_rows(rows)?;

    let span = Span::current();
    span.pb_set_style(
        &ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
        )
        .map_err(|e| AppError::Other(e.into()))?,
    );
    span.pb_set_message("Appending rows");
    span.pb_set_length(rows.len() as u64);

    for chunk in rows.chunks(batch_size.max(1)) {
        client.add_rows(tab_id, chunk).await?;
        span.pb_inc(chunk.len() as u64);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockSheetsClient {
        appended: Arc<Mutex<Vec<Vec<Vec<CellValue>>>>>,
        fail_after: Option<usize>,
    }

    #[async_trait]
    impl SheetOperations for MockSheetsClient {
        async fn add_header(&self, _tab_id: i32, _header_values: &[CellValue]) -> Result<()> {
            Ok(())
        }

        async fn add_rows(&self, _tab_id: i32, rows: &[Vec<CellValue>]) -> Result<()> {
            let mut appended = self.appended.lock().unwrap();
            if self.fail_after == Some(appended.len()) {
                return Err(AppError::Sheets("Failed to add rows: boom".to_string()));
            }
            appended.push(rows.to_vec());
            Ok(())
        }

        async fn change_format(&self, _tab_id: i32, _column: u16, _formats: &[&str]) -> Result<()> {
            Ok(())
        }
    }

    fn numbered_rows(count: usize) -> Vec<Vec<CellValue>> {
        (0..count)
            .map(|i| vec![CellValue::Text(format!("Est {}", i)), CellValue::Number(i as f64)])
            .collect()
    }

    #[tokio::test]
    async fn test_append_in_batches_preserves_order() {
        let client = MockSheetsClient::default();
        let rows = numbered_rows(5);

        append_in_batches(&client, 0, &rows, 2).await.unwrap();

        let appended = client.appended.lock().unwrap();
        let sizes: Vec<usize> = appended.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(appended.concat(), rows);
    }

    #[tokio::test]
    async fn test_append_in_batches_single_request() {
        let client = MockSheetsClient::default();
        let rows = numbered_rows(3);

        append_in_batches(&client, 0, &rows, 500).await.unwrap();

        assert_eq!(client.appended.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_append_in_batches_rejects_bad_cell_before_sending() {
        let client = MockSheetsClient::default();
        let mut rows = numbered_rows(4);
        rows.push(vec![CellValue::Text("Born 1980-07-12".to_string())]);

        let err = append_in_batches(&client, 0, &rows, 2).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidDate(_)), "got {:?}", err);
        assert!(
            client.appended.lock().unwrap().is_empty(),
            "no chunk should be appended when a later row is invalid"
        );
    }

    #[tokio::test]
    async fn test_append_in_batches_stops_on_error() {
        let client = MockSheetsClient {
            fail_after: Some(1),
            ..Default::default()
        };
        let rows = numbered_rows(6);

        let err = append_in_batches(&client, 0, &rows, 2).await.unwrap_err();

        assert!(matches!(err, AppError::Sheets(_)), "got {:?}", err);
        assert_eq!(client.appended.lock().unwrap().len(), 1);
    }
}
