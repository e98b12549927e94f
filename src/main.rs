use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use book_discovery::CatalogKind;
use book_discovery::core::config;
use book_discovery::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "book-discovery", about = "Browse, inspect and get recommendations for books")]
struct Args {
    /// Book catalog to browse
    #[arg(short, long, value_enum)]
    catalog: Option<CatalogKind>,

    /// Read settings from this file instead of ~/.book-discovery/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("book-discovery: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = match config::resolve(&loaded.config, args.catalog) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("book-discovery: {e}");
            return ExitCode::FAILURE;
        }
    };

    // File logger: stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    // Config was read before the logger existed
    loaded.replay_notices();
    log::info!("Book Discovery starting with catalog: {}", resolved.catalog);

    if let Err(e) = tui::run(resolved) {
        log::error!("Terminal error: {}", e);
        eprintln!("book-discovery: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
