use crate::common::errors::AppError;
use crate::sheets::api::{HEADER_TITLES, SpreadsheetApi, TabId, add_sheet, header_cell, update_row};
use tracing::info;

/// Returns the id of the tab titled `product`, creating the tab and its
/// header row when no such tab exists. Titles match case-sensitively.
pub async fn ensure_tab<A: SpreadsheetApi>(api: &A, product: &str) -> Result<TabId, AppError> {
    if product.trim().is_empty() {
        return Err(AppError::InvalidInput("product name is empty".to_string()));
    }

    if let Some(id) = find_tab(api, product).await? {
        return Ok(id);
    }

    api.batch_update(vec![add_sheet(product)]).await?;
    // Re-fetch metadata to learn the id the service assigned.
    let id = find_tab(api, product)
        .await?
        .ok_or_else(|| AppError::TabMissing(product.to_string()))?;
    write_header(api, id).await?;
    info!(product, tab_id = id.0, "created product tab");
    Ok(id)
}

async fn find_tab<A: SpreadsheetApi>(api: &A, title: &str) -> Result<Option<TabId>, AppError> {
    let metadata = api.fetch_metadata().await?;
    for sheet in metadata.sheets.unwrap_or_default() {
        let Some(properties) = sheet.properties else {
            continue;
        };
        if properties.title.as_deref() == Some(title) {
            let id = properties
                .sheet_id
                .ok_or_else(|| AppError::RemoteCall(format!("tab {title} has no id")))?;
            return Ok(Some(TabId(id)));
        }
    }
    Ok(None)
}

/// Writes the five header titles into row 0 as one batched request.
async fn write_header<A: SpreadsheetApi>(api: &A, tab: TabId) -> Result<(), AppError> {
    let cells = HEADER_TITLES.iter().map(|t| header_cell(t)).collect();
    api.batch_update(vec![update_row(tab, 0, cells)]).await
}
