pub mod event;
pub mod row;
pub mod tab;

use crate::common::errors::AppError;
use crate::recorder::event::LicenseEvent;
use crate::recorder::row::WriteStrategy;
use crate::sheets::api::{SpreadsheetApi, TabId};

/// Composes the tab resolver and the row writer over one API session.
pub struct SheetRecorder<A> {
    api: A,
}

impl<A: SpreadsheetApi> SheetRecorder<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Resolves the product tab, then writes one row with the chosen
    /// strategy. Returns the tab the row landed in.
    pub async fn record(
        &self,
        event: &LicenseEvent,
        strategy: WriteStrategy,
    ) -> Result<TabId, AppError> {
        let tab = tab::ensure_tab(&self.api, &event.product).await?;
        row::write_record(&self.api, tab, event, strategy).await?;
        Ok(tab)
    }
}
