use crate::common::errors::AppError;
use crate::recorder::event::LicenseEvent;
use crate::sheets::api::{SpreadsheetApi, TabId, append_row, text_row, update_row};
use clap::ValueEnum;
use google_sheets4::api::Spreadsheet;

/// Sequence literal found in the header cell above the first data row.
const HEADER_SEQUENCE: &str = "SL";

/// How a row reaches the tab. The two strategies have different consistency
/// properties; the caller picks one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WriteStrategy {
    /// Locate the first unused row, derive the sequence number from the row
    /// above, and overwrite in place with one batched request.
    Overwrite,
    /// One append-cells call; the service assigns the row. The sequence
    /// column is always the literal "1", it is never derived from prior rows.
    Append,
}

pub async fn write_record<A: SpreadsheetApi>(
    api: &A,
    tab: TabId,
    event: &LicenseEvent,
    strategy: WriteStrategy,
) -> Result<(), AppError> {
    match strategy {
        WriteStrategy::Overwrite => insert_at_cursor(api, tab, event).await,
        WriteStrategy::Append => append(api, tab, event).await,
    }
}

/// Derives the next sequence number from the cell directly above the target
/// row: no predecessor or the header literal means the tab is empty so far.
pub fn next_sequence(previous: Option<&str>) -> Result<u64, AppError> {
    match previous {
        None => Ok(1),
        Some(HEADER_SEQUENCE) => Ok(1),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(|n| n + 1)
            .map_err(|_| AppError::BadSequence(value.to_string())),
    }
}

async fn insert_at_cursor<A: SpreadsheetApi>(
    api: &A,
    tab: TabId,
    event: &LicenseEvent,
) -> Result<(), AppError> {
    let grid = api.fetch_grid().await?;
    let rows = tab_rows(&grid, tab)?;
    // First unused row index; exact only while the used range has no gaps.
    let next_row = rows.len();
    let previous = rows.last().and_then(|r| r.first()).map(String::as_str);
    let sequence = next_sequence(previous)?;

    let values = event.row_values(&sequence.to_string());
    api.batch_update(vec![update_row(tab, next_row as i32, text_row(&values))])
        .await
}

async fn append<A: SpreadsheetApi>(
    api: &A,
    tab: TabId,
    event: &LicenseEvent,
) -> Result<(), AppError> {
    let values = event.row_values("1");
    api.batch_update(vec![append_row(tab, text_row(&values))])
        .await
}

/// Formatted cell values of one tab, extracted from a full-grid fetch.
fn tab_rows(spreadsheet: &Spreadsheet, tab: TabId) -> Result<Vec<Vec<String>>, AppError> {
    let sheets = spreadsheet.sheets.as_deref().unwrap_or_default();
    let sheet = sheets
        .iter()
        .find(|s| {
            s.properties
                .as_ref()
                .and_then(|p| p.sheet_id)
                .is_some_and(|id| id == tab.0)
        })
        .ok_or_else(|| AppError::RemoteCall(format!("no grid data for tab {}", tab.0)))?;

    let row_data = sheet
        .data
        .as_ref()
        .and_then(|d| d.first())
        .and_then(|g| g.row_data.as_ref());

    let Some(row_data) = row_data else {
        return Ok(Vec::new());
    };

    Ok(row_data
        .iter()
        .map(|row| {
            row.values
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|cell| {
                    cell.formatted_value
                        .clone()
                        .or_else(|| {
                            cell.user_entered_value
                                .as_ref()
                                .and_then(|v| v.string_value.clone())
                        })
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect())
}
