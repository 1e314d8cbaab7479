//! Pure translation from plain row values and format keywords into the
//! request fragments expected by `spreadsheets.batchUpdate`.

mod cell;
mod date;
mod format;

pub use cell::{
    CellType, CellValue, SerializedCell, classify, serialize_cell, serialize_row, serialize_rows,
};
pub use date::{datetime_to_spreadsheet_epoch, to_spreadsheet_epoch};
pub use format::{FormatKeyword, build_format_style};
