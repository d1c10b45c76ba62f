use chrono::NaiveDate;
use clap::Parser;
use minaret::core::config::{self, CliOverrides};
use minaret::timings::CalculationMethod;
use minaret::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "minaret", about = "Islamic prayer times for Chinese cities")]
struct Args {
    /// Province to show on startup, e.g. "Jiangsu (江苏)"
    #[arg(short, long)]
    province: Option<String>,

    /// City to show on startup, e.g. "Yangzhou (扬州)"
    #[arg(short, long)]
    city: Option<String>,

    /// Date to show (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Calculation method for the prayer-time astronomy
    #[arg(short, long, value_enum)]
    method: Option<CalculationMethod>,

    /// Override the Aladhan API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to minaret.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("minaret.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Minaret starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unusable ({e}), continuing with defaults");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            province: args.province,
            city: args.city,
            method: args.method,
            base_url: args.base_url,
        },
    );
    log::info!(
        "Resolved config: {} / {} via {}",
        resolved.province,
        resolved.city,
        resolved.base_url
    );

    tui::run(resolved, args.date)
}
