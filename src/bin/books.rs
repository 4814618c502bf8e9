// src/bin/books.rs
use color_eyre::eyre::eyre;
use feed_scrape::{
    browser::ChromeSession,
    config::consts::BOOKS_LOG_PREFIX,
    config::options::BooksOptions,
    log, runner,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log = log::init(BOOKS_LOG_PREFIX).map_err(|e| eyre!("logging setup failed: {e}"))?;

    let opts = BooksOptions::default();
    let mut session = match ChromeSession::launch(opts.headless) {
        Ok(s) => s,
        Err(e) => {
            e.report("starting browser");
            return Ok(());
        }
    };

    // `session` is dropped (browser closed) on every path out of here
    let result = runner::run_books(&mut session, &opts);
    if let Err(e) = &result {
        tracing::error!("scraping failed: {e}");
    }
    result.map(|_| ()).map_err(|e| eyre!("export failed: {e}"))
}
