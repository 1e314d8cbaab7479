use google_sheets4::FieldMask;
use google_sheets4::api::{
    AppendCellsRequest, CellData, CellFormat, GridProperties, GridRange, RepeatCellRequest,
    Request, RowData, SheetProperties, TextFormat, UpdateSheetPropertiesRequest,
};

const HEADER_FONT_SIZE: i32 = 12;

/// Append rows after the last row that has data.
pub(super) fn append_rows_request(sheet_id: i32, rows: Vec<RowData>) -> Request {
    Request {
        append_cells: Some(AppendCellsRequest {
            sheet_id: Some(sheet_id),
            rows: Some(rows),
            fields: Some(FieldMask::new(&["*"])),
        }),
        ..Default::default()
    }
}

/// Center and embolden the header row.
pub(super) fn header_style_request(sheet_id: i32) -> Request {
    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(0),
                end_row_index: Some(1),
                start_column_index: None,
                end_column_index: None,
            }),
            cell: Some(CellData {
                user_entered_format: Some(CellFormat {
                    horizontal_alignment: Some("CENTER".to_string()),
                    text_format: Some(TextFormat {
                        bold: Some(true),
                        font_size: Some(HEADER_FONT_SIZE),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&[
                "userEnteredFormat.textFormat",
                "userEnteredFormat.horizontalAlignment",
            ])),
        }),
        ..Default::default()
    }
}

/// Freeze header row.
pub(super) fn freeze_header_request(sheet_id: i32) -> Request {
    Request {
        update_sheet_properties: Some(UpdateSheetPropertiesRequest {
            properties: Some(SheetProperties {
                sheet_id: Some(sheet_id),
                grid_properties: Some(GridProperties {
                    frozen_row_count: Some(1),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["gridProperties.frozenRowCount"])),
        }),
        ..Default::default()
    }
}

/// Replace the format of one column, leaving the header row alone.
pub(super) fn column_format_request(sheet_id: i32, column: u16, format: CellFormat) -> Request {
    let column = i32::from(column);

    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(1), // Skip header row
                end_row_index: None,
                start_column_index: Some(column),
                end_column_index: Some(column + 1),
            }),
            cell: Some(CellData {
                user_entered_format: Some(format),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["userEnteredFormat"])),
        }),
        ..Default::default()
    }
}
