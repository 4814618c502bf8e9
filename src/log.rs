// src/log.rs
// One log file per run under `logs/`, plus the same lines on the console.

use std::error::Error;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::consts::{LOG_DIR, LOG_TIME_FORMAT};
use crate::file::ensure_directory;

/// Keeps the file writer alive. Hold it until the end of `main`,
/// or buffered lines are lost.
#[must_use]
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// `api_sport` at 09/03/2025 14:05:07 → `api_sport_09032025_140507.log`.
pub fn log_file_name(prefix: &str, at: DateTime<Local>) -> String {
    format!("{prefix}_{}.log", at.format("%d%m%Y_%H%M%S"))
}

pub fn init(prefix: &str) -> Result<LogGuard, Box<dyn Error>> {
    init_in(Path::new(LOG_DIR), prefix)
}

/// File lines: `2025-03-09 14:05:07  INFO message`. Console: ` INFO message`.
/// Level defaults to `info`; `RUST_LOG` overrides it.
pub fn init_in(dir: &Path, prefix: &str) -> Result<LogGuard, Box<dyn Error>> {
    ensure_directory(dir)?;
    let name = log_file_name(prefix, Local::now());
    let path = dir.join(&name);

    // `never` = no rotation; opens in append mode
    let appender = tracing_appender::rolling::never(dir, &name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoLocal::new(s!(LOG_TIME_FORMAT)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    info!("logging to {}", path.display());
    Ok(LogGuard { _guard: guard })
}
