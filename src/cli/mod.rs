mod auth;
mod input;
mod show;
mod write;

use clap::{Parser, Subcommand};
use sheet_writer::error::Result;
use std::path::PathBuf;

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "sheet-writer")]
#[command(about = "Append rows and formats to a Google Sheets spreadsheet", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Header { tab, values } => write::header(*tab, values).await,
            Commands::Rows {
                tab,
                file,
                batch_size,
            } => write::rows(*tab, file, *batch_size).await,
            Commands::Format {
                tab,
                column,
                formats,
            } => write::format(*tab, *column, formats).await,
            Commands::Auth { reset } => auth::execute(*reset).await,
            Commands::Show { resource } => resource.execute().await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a bold, frozen header row to an empty tab
    Header {
        /// Tab (sheet) ID, as shown after `gid=` in the sheet URL
        #[arg(long, default_value_t = 0)]
        tab: i32,
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Append rows from a .json or .csv file
    Rows {
        #[arg(long, default_value_t = 0)]
        tab: i32,
        #[arg(long)]
        file: PathBuf,
        /// Rows sent per request
        #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
        batch_size: u32,
    },
    /// Format every row but the header in one column
    Format {
        #[arg(long, default_value_t = 0)]
        tab: i32,
        /// Zero-based column index
        #[arg(long)]
        column: u16,
        /// INTEGER, BOLD, SPECIAL_DATE, BR_DATE or BR_DATE_TIME
        #[arg(required = true)]
        formats: Vec<String>,
    },
    /// Verify the service account credentials
    Auth {
        /// Clear cached tokens before authenticating
        #[arg(long)]
        reset: bool,
    },
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}
