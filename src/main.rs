use anyhow::Result;
use clap::Parser;
use tracing::info;

use rfid_panel::reader::{ReaderClient, DEFAULT_BASE_URL};
use rfid_panel::tui;

#[derive(Parser)]
#[command(
    name = "rfid-panel",
    about = "Terminal control panel for a UHF RFID reader service."
)]
struct Cli {
    /// Reader Service base URL (defaults to http://localhost:5000/api,
    /// or RFID_READER_URL if set)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never corrupt the raw-mode terminal.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rfid_panel=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("RFID_READER_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.into());

    info!("reader service at {base_url}");

    let client = ReaderClient::with_base_url(base_url);
    tui::runner::run(client).await
}
