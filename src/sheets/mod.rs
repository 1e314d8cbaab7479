mod auth;
mod client;
mod requests;
mod session;

pub use auth::read_credentials;
pub use client::SheetsClient;
pub use session::SheetsSession;

// Re-export clear_tokens for CLI usage
pub use auth::clear_tokens as clear_sheets_tokens;

use crate::error::Result;
use crate::translate::CellValue;
use async_trait::async_trait;
use google_sheets4::api::{Request, Scope};

// Read and write access to all spreadsheets shared with the service account
pub(crate) const AUTH_SCOPE: Scope = Scope::Spreadsheet;

/// Transport for one `spreadsheets.batchUpdate` call.
#[async_trait]
pub trait BatchUpdate {
    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: Vec<Request>,
    ) -> anyhow::Result<()>;
}

#[async_trait]
pub trait SheetOperations {
    /// Append a header row and style it. Meant for an empty tab: the styling
    /// always targets row 0.
    async fn add_header(&self, tab_id: i32, header_values: &[CellValue]) -> Result<()>;

    /// Append rows after the last row with data.
    async fn add_rows(&self, tab_id: i32, rows: &[Vec<CellValue>]) -> Result<()>;

    /// Replace the format of every row but the header in one column.
    async fn change_format(&self, tab_id: i32, column: u16, formats: &[&str]) -> Result<()>;
}
