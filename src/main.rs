use clap::Parser;
use sheet_recorder::cli::Args;
use sheet_recorder::common::errors::AppError;
use sheet_recorder::recorder::SheetRecorder;
use sheet_recorder::sheets::client::GoogleSheets;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Logging goes to stderr so stdout stays quiet for scripting.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        error!("recording failed: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let event = args.license_event()?;
    let api = GoogleSheets::open(&args.credentials, args.spreadsheet_id.clone()).await?;
    let recorder = SheetRecorder::new(api);
    let tab = recorder.record(&event, args.strategy).await?;
    info!(product = %event.product, tab_id = tab.0, "event recorded");
    Ok(())
}
