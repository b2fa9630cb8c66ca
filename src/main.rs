use boilercompass::core::config::{self, CliOverrides};
use boilercompass::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "boilercompass", about = "Terminal chat for Purdue events, sports, and more")]
struct Args {
    /// Backend URL that answers `POST {"query": ...}`
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(short, long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to boilercompass.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("boilercompass.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(|e| {
        log::error!("Failed to load config: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            timeout_secs: args.timeout,
        },
    );

    log::info!("BoilerCompass starting up against {}", resolved.endpoint);

    tui::run(resolved)
}
