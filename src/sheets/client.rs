use crate::common::errors::AppError;
use crate::sheets::api::SpreadsheetApi;
use google_sheets4::api::{BatchUpdateSpreadsheetRequest, Request, Spreadsheet};
use google_sheets4::{Sheets, hyper, hyper_rustls, oauth2};
use std::path::Path;

type Connector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Authenticated session bound to one spreadsheet. The spreadsheet must be
/// shared with the service account email.
pub struct GoogleSheets {
    hub: Sheets<Connector>,
    spreadsheet_id: String,
}

impl GoogleSheets {
    /// Opens a session from a service-account credential file. Credential or
    /// session failures are unrecoverable for the caller.
    pub async fn open(credentials: &Path, spreadsheet_id: String) -> Result<Self, AppError> {
        let key = oauth2::read_service_account_key(credentials)
            .await
            .map_err(|e| AppError::Credentials(e.to_string()))?;

        let client = hyper::Client::builder().build(
            hyper_rustls::HttpsConnectorBuilder::new()
                .with_native_roots()
                .map_err(|e| AppError::Credentials(e.to_string()))?
                .https_only()
                .enable_http1()
                .build(),
        );
        let auth = oauth2::ServiceAccountAuthenticator::with_client(key, client.clone())
            .build()
            .await
            .map_err(|e| AppError::Credentials(e.to_string()))?;

        Ok(Self {
            hub: Sheets::new(client, auth),
            spreadsheet_id,
        })
    }
}

impl SpreadsheetApi for GoogleSheets {
    async fn fetch_metadata(&self) -> Result<Spreadsheet, AppError> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.spreadsheet_id)
            .doit()
            .await
            .map_err(|e| AppError::RemoteCall(e.to_string()))?;
        Ok(spreadsheet)
    }

    async fn fetch_grid(&self) -> Result<Spreadsheet, AppError> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.spreadsheet_id)
            .include_grid_data(true)
            .doit()
            .await
            .map_err(|e| AppError::RemoteCall(e.to_string()))?;
        Ok(spreadsheet)
    }

    async fn batch_update(&self, requests: Vec<Request>) -> Result<(), AppError> {
        let body = BatchUpdateSpreadsheetRequest {
            requests: Some(requests),
            ..Default::default()
        };
        self.hub
            .spreadsheets()
            .batch_update(body, &self.spreadsheet_id)
            .doit()
            .await
            .map_err(|e| AppError::RemoteCall(e.to_string()))?;
        Ok(())
    }
}
