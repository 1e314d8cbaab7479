use clap::Subcommand;
use sheet_writer::config::Config;
use sheet_writer::error::Result;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show configuration and cache paths
    Paths,
    /// Show the configured spreadsheet
    Spreadsheet,
}

impl ShowResource {
    pub async fn execute(&self) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(),
            ShowResource::Spreadsheet => show_spreadsheet(),
        }
    }
}

fn show_paths() -> Result<()> {
    let config_path = Config::config_file()?;
    let cache_dir = Config::cache_dir()?;

    info!(path = ?config_path, "Config path");
    info!(path = ?cache_dir, "Cache path");

    Ok(())
}

fn show_spreadsheet() -> Result<()> {
    let config = Config::load()?;

    info!(id = config.google.spreadsheet_id, "Spreadsheet ID");
    info!(url = config.google.spreadsheet_url(), "Spreadsheet URL");
    info!(path = ?config.google.credentials_file, "Credentials file");

    Ok(())
}
