use crate::common::errors::AppError;
use crate::recorder::event::LicenseEvent;
use crate::recorder::row::WriteStrategy;
use clap::Parser;
use std::path::PathBuf;

/// Records one license-registration event into a Google Sheets spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "sheet-recorder")]
pub struct Args {
    /// Spreadsheet to write into. Share it with the service account email.
    #[arg(long, env = "RECORDER_SPREADSHEET_ID")]
    pub spreadsheet_id: String,

    /// Service-account credential file.
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials: PathBuf,

    /// How the row reaches the tab.
    #[arg(long, value_enum, default_value_t = WriteStrategy::Overwrite)]
    pub strategy: WriteStrategy,

    /// JSON file holding the event fields, instead of the individual flags.
    #[arg(long, conflicts_with_all = ["name", "email", "product", "cluster_id"])]
    pub event_file: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Product name; also the title of the tab the event lands in.
    #[arg(long)]
    pub product: Option<String>,

    #[arg(long)]
    pub cluster_id: Option<String>,
}

impl Args {
    /// Builds the event from the event file when given, otherwise from the
    /// individual flags. All four flags are required in that case.
    pub fn license_event(&self) -> Result<LicenseEvent, AppError> {
        if let Some(path) = &self.event_file {
            let raw = std::fs::read_to_string(path)?;
            return serde_json::from_str(&raw)
                .map_err(|e| AppError::InvalidInput(format!("event file: {e}")));
        }

        match (&self.name, &self.email, &self.product, &self.cluster_id) {
            (Some(name), Some(email), Some(product), Some(cluster_id)) => Ok(LicenseEvent::new(
                name.clone(),
                email.clone(),
                product.clone(),
                cluster_id.clone(),
            )),
            _ => Err(AppError::InvalidInput(
                "provide --event-file or all of --name --email --product --cluster-id".to_string(),
            )),
        }
    }
}
