use sheet_writer::config::Config;
use sheet_writer::error::Result;
use sheet_writer::sheets::{SheetsSession, clear_sheets_tokens};
use tracing::info;

pub async fn execute(reset: bool) -> Result<()> {
    if reset {
        clear_sheets_tokens()?;
    }

    let config = Config::load()?;
    let _session = SheetsSession::from_credentials_file(&config.google.credentials_file).await?;

    info!("Google Sheets authentication verified");

    Ok(())
}
