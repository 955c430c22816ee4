//! Logging utilities

use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter used when neither `RUST_LOG` nor `LETTERBOX_LOGLEVEL` is set
pub fn default_filter() -> String {
    format!(
        "{}=info,reqwest=warn,hyper=warn",
        env!("CARGO_CRATE_NAME")
    )
}

/// `RUST_LOG`, then `LETTERBOX_LOGLEVEL`, then [`default_filter`]
pub fn resolve_filter(rust_log: Option<String>, app_log: Option<String>) -> String {
    let non_blank = |filter: &String| !filter.trim().is_empty();
    rust_log
        .filter(non_blank)
        .or(app_log.filter(non_blank))
        .unwrap_or_else(default_filter)
}

pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.clone())
}

/// Send `tracing` and `log` output to a file; the terminal belongs to the UI
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(log_path())?;
    let filter = resolve_filter(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.clone()).ok(),
    );

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(tracing_subscriber::filter::EnvFilter::new(filter));
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();
    Ok(())
}
