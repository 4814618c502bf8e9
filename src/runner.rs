// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    browser::PageRenderer,
    config::options::{BooksOptions, ExportOptions, SportOptions, WeatherOptions},
    file::write_export,
    scrape,
    store::Accumulator,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    /// `None` when nothing was collected (no file is written then).
    pub file_written: Option<PathBuf>,
}

/// How loudly to say that a run came back empty.
#[derive(Clone, Copy, Debug)]
pub enum EmptyNotice {
    Info(&'static str),
    Warn(&'static str),
}

/// Export step shared by every pipeline: write only when something was collected.
pub fn export_collected(
    acc: Accumulator,
    export: &ExportOptions,
    empty: EmptyNotice,
) -> Result<RunSummary, Box<dyn Error>> {
    if acc.is_empty() {
        match empty {
            EmptyNotice::Info(msg) => info!("{msg}"),
            EmptyNotice::Warn(msg) => warn!("{msg}"),
        }
        return Ok(RunSummary { records: 0, file_written: None });
    }

    let data = acc.into_dataset();
    let path = write_export(export, &data)?;
    let records = data.rows.len();
    info!("wrote {records} rows to {}", path.display());
    Ok(RunSummary { records, file_written: Some(path) })
}

/* ---------------- Pipelines ---------------- */

pub fn run_sport(
    opts: &SportOptions,
) -> Result<RunSummary, Box<dyn Error>> {
    let acc = scrape::collect_matches(opts);
    export_collected(acc, &opts.export, EmptyNotice::Info("no matches were returned by the API"))
}

pub fn run_weather(
    opts: &WeatherOptions,
) -> Result<RunSummary, Box<dyn Error>> {
    let acc = scrape::collect_weather(opts);
    export_collected(
        acc,
        &opts.export,
        EmptyNotice::Warn("no weather data collected; check the API key or the cities"),
    )
}

pub fn run_books<R: PageRenderer + ?Sized>(
    renderer: &mut R,
    opts: &BooksOptions,
) -> Result<RunSummary, Box<dyn Error>> {
    let acc = scrape::collect_books(renderer, opts);
    export_collected(acc, &opts.export, EmptyNotice::Warn("no books were scraped"))
}
