// src/bin/weather.rs
use color_eyre::eyre::eyre;
use feed_scrape::{config::consts::WEATHER_LOG_PREFIX, config::options::WeatherOptions, log, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log = log::init(WEATHER_LOG_PREFIX).map_err(|e| eyre!("logging setup failed: {e}"))?;

    // Add cities to `WEATHER_CITIES` in config/consts.rs
    let opts = WeatherOptions::from_env();
    runner::run_weather(&opts).map_err(|e| eyre!("export failed: {e}"))?;
    Ok(())
}
