//! Append rows, headers and column formats to a Google Sheets spreadsheet
//! using a service account.

pub mod config;
pub mod error;
pub mod sheets;
pub mod translate;
