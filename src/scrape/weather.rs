// src/scrape/weather.rs
use tracing::info;

use crate::{
    config::options::WeatherOptions,
    core::net,
    specs::weather,
    store::Accumulator,
};

/// One reading per configured city. A failed city is logged and skipped;
/// the remaining cities are still queried.
pub fn collect_weather(opts: &WeatherOptions) -> Accumulator {
    let mut acc = Accumulator::with_columns(weather::COLUMNS);

    let client = match net::build_client(&opts.http) {
        Ok(c) => c,
        Err(e) => {
            e.report("building HTTP client");
            return acc;
        }
    };

    for city in &opts.cities {
        match weather::fetch_city(&client, opts, city) {
            Ok(record) => acc.push(record),
            Err(e) => e.report(&city.query()),
        }
        // free tier rate limit
        opts.delay.wait();
    }

    info!("{} of {} cities collected", acc.len(), opts.cities.len());
    acc
}
