use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use surah::core::config::{self, CliOverrides, SurahConfig};
use surah::tui;

#[derive(Parser)]
#[command(name = "surah", about = "Browse the chapters of the Quran from equran.id")]
struct Args {
    /// API base URL (the list is fetched from <base-url>/surat)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(long)]
    timeout: Option<u64>,

    /// Show a failed load as a plain empty list
    #[arg(long)]
    quiet_errors: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to surah.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("surah.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        SurahConfig::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url,
        timeout_secs: args.timeout,
        hide_load_errors: args.quiet_errors,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!("Surah starting up with {:?}", resolved);

    tui::run(resolved)
}
