// src/bin/sport.rs
use color_eyre::eyre::eyre;
use feed_scrape::{config::consts::SPORT_LOG_PREFIX, config::options::SportOptions, log, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log = log::init(SPORT_LOG_PREFIX).map_err(|e| eyre!("logging setup failed: {e}"))?;

    let opts = SportOptions::from_env();
    runner::run_sport(&opts).map_err(|e| eyre!("export failed: {e}"))?;
    Ok(())
}
