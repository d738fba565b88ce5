use crate::common::errors::AppError;
use google_sheets4::FieldMask;
use google_sheets4::api::{
    AddSheetRequest, AppendCellsRequest, CellData, CellFormat, Color, ExtendedValue,
    GridCoordinate, Request, RowData, SheetProperties, Spreadsheet, TextFormat,
    UpdateCellsRequest,
};

/// Column titles of row 0 in every product tab.
pub const HEADER_TITLES: [&str; 5] = ["SL", "Name", "Email", "ClusterID", "Time"];

/// Numeric tab identifier assigned by the remote service. Zero is a valid id;
/// "absent" is always expressed as `Option::None`, never as a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabId(pub i32);

/// The narrow surface of the remote spreadsheet service the recorder uses.
/// Every call is one blocking round-trip; failures propagate without retry.
#[allow(async_fn_in_trait)]
pub trait SpreadsheetApi {
    /// Spreadsheet metadata: the list of tabs with titles and ids, no cell data.
    async fn fetch_metadata(&self) -> Result<Spreadsheet, AppError>;

    /// Full grid data for every tab.
    async fn fetch_grid(&self) -> Result<Spreadsheet, AppError>;

    /// Ordered list of mutations applied by the service as one call.
    async fn batch_update(&self, requests: Vec<Request>) -> Result<(), AppError>;
}

pub fn add_sheet(title: &str) -> Request {
    Request {
        add_sheet: Some(AddSheetRequest {
            properties: Some(SheetProperties {
                title: Some(title.to_string()),
                ..Default::default()
            }),
        }),
        ..Default::default()
    }
}

/// One update-cells request writing `cells` left-to-right from column 0 of
/// `row_index`, so a whole row lands in a single mutation.
pub fn update_row(tab: TabId, row_index: i32, cells: Vec<CellData>) -> Request {
    Request {
        update_cells: Some(UpdateCellsRequest {
            fields: Some(FieldMask::new(&["*"])),
            start: Some(GridCoordinate {
                sheet_id: Some(tab.0),
                row_index: Some(row_index),
                column_index: Some(0),
            }),
            rows: Some(vec![RowData { values: Some(cells) }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// One append-cells request; the service assigns the row index.
pub fn append_row(tab: TabId, cells: Vec<CellData>) -> Request {
    Request {
        append_cells: Some(AppendCellsRequest {
            sheet_id: Some(tab.0),
            fields: Some(FieldMask::new(&["*"])),
            rows: Some(vec![RowData { values: Some(cells) }]),
        }),
        ..Default::default()
    }
}

pub fn text_cell(value: &str) -> CellData {
    CellData {
        user_entered_value: Some(ExtendedValue {
            string_value: Some(value.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Header cells are bold on a fixed background color.
pub fn header_cell(value: &str) -> CellData {
    let mut cell = text_cell(value);
    cell.user_entered_format = Some(CellFormat {
        text_format: Some(TextFormat {
            bold: Some(true),
            ..Default::default()
        }),
        background_color: Some(Color {
            alpha: Some(1.0),
            red: Some(239.0 / 255.0),
            green: Some(226.0 / 255.0),
            blue: Some(149.0 / 255.0),
        }),
        ..Default::default()
    });
    cell
}

pub fn text_row(values: &[String]) -> Vec<CellData> {
    values.iter().map(|v| text_cell(v)).collect()
}
