use super::{BatchUpdate, SheetOperations};
use crate::config::GoogleConfig;
use crate::error::{AppError, Result};
use crate::sheets::requests::{
    append_rows_request, column_format_request, freeze_header_request, header_style_request,
};
use crate::sheets::session::SheetsSession;
use crate::translate::{CellValue, build_format_style, serialize_rows};
use async_trait::async_trait;
use google_sheets4::api::Request;
use tracing::{debug, instrument};

pub struct SheetsClient<S = SheetsSession> {
    session: S,
    spreadsheet_id: String,
}

impl SheetsClient<SheetsSession> {
    /// Authenticate with the configured service account and bind the
    /// configured spreadsheet.
    pub async fn connect(config: &GoogleConfig) -> Result<Self> {
        let session = SheetsSession::from_credentials_file(&config.credentials_file).await?;
        Ok(Self::new(session, config.spreadsheet_id.clone()))
    }
}

impl<S> SheetsClient<S>
where
    S: BatchUpdate + Sync,
{
    pub fn new(session: S, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            session,
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    async fn submit(&self, action: &str, requests: Vec<Request>) -> Result<()> {
        debug!(requests = requests.len(), "Sending batch update");

        self.session
            .batch_update(&self.spreadsheet_id, requests)
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to {}: {:#}", action, e)))
    }
}

#[async_trait]
impl<S> SheetOperations for SheetsClient<S>
where
    S: BatchUpdate + Send + Sync,
{
    #[instrument(name = "Adding header", skip(self, header_values))]
    async fn add_header(&self, tab_id: i32, header_values: &[CellValue]) -> Result<()> {
        let rows = serialize_rows(&[header_values.to_vec()])?;

        let requests = vec![
            append_rows_request(tab_id, rows),
            header_style_request(tab_id),
            freeze_header_request(tab_id),
        ];

        self.submit("add header", requests).await
    }

    #[instrument(name = "Adding rows", skip(self, rows), fields(rows = rows.len()))]
    async fn add_rows(&self, tab_id: i32, rows: &[Vec<CellValue>]) -> Result<()> {
        let rows = serialize_rows(rows)?;
        self.submit("add rows", vec![append_rows_request(tab_id, rows)])
            .await
    }

    #[instrument(name = "Changing column format", skip(self))]
    async fn change_format(&self, tab_id: i32, column: u16, formats: &[&str]) -> Result<()> {
        let style = build_format_style(formats);
        self.submit(
            "change format",
            vec![column_format_request(tab_id, column, style)],
        )
        .await
    }
}
