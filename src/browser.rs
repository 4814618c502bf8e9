// src/browser.rs
// Rendered-page access for sources that need a real browser.

use crate::config::options::BooksOptions;
use crate::core::net::FetchError;
use crate::paginate::{FetchResult, PageSource};
use crate::specs::books;
use crate::store::Record;

/// Navigate to `url` and hand back the page HTML once it has loaded.
pub trait PageRenderer {
    fn render(&mut self, url: &str) -> Result<String, FetchError>;
}

/// Catalog pages read through a renderer.
pub struct BookPages<'a, R: ?Sized> {
    renderer: &'a mut R,
    opts: &'a BooksOptions,
}

impl<'a, R: PageRenderer + ?Sized> BookPages<'a, R> {
    pub fn new(renderer: &'a mut R, opts: &'a BooksOptions) -> Self {
        Self { renderer, opts }
    }
}

impl<R: PageRenderer + ?Sized> PageSource for BookPages<'_, R> {
    type Item = Record;

    fn fetch_page(&mut self, page: u32) -> FetchResult<Record> {
        let url = self.opts.page_url(page);
        tracing::info!("collecting {url}");
        let html = self.renderer.render(&url)?;
        books::parse_page(&html)
    }
}

#[cfg(feature = "browser")]
pub use chrome::ChromeSession;

#[cfg(feature = "browser")]
mod chrome {
    use std::ffi::OsStr;
    use std::fmt::Display;
    use std::sync::Arc;

    use headless_chrome::{Browser, LaunchOptions, Tab};
    use tracing::info;

    use super::PageRenderer;
    use crate::core::net::FetchError;

    fn browser_err(e: impl Display) -> FetchError {
        FetchError::Browser(e.to_string())
    }

    /// Headless Chrome with one tab. Chrome is shut down when this is dropped,
    /// so every exit path (early return, `?`, unwinding) releases it.
    pub struct ChromeSession {
        tab: Arc<Tab>,
        _browser: Browser,
    }

    impl ChromeSession {
        pub fn launch(headless: bool) -> Result<Self, FetchError> {
            info!("starting browser (headless={headless})");
            let options = LaunchOptions::default_builder()
                .headless(headless)
                .sandbox(false) // restricted Linux containers
                .args(vec![OsStr::new("--disable-gpu")])
                .build()
                .map_err(browser_err)?;

            let browser = Browser::new(options).map_err(browser_err)?;
            let tab = browser.new_tab().map_err(browser_err)?;
            info!("browser ready");
            Ok(Self { tab, _browser: browser })
        }
    }

    impl PageRenderer for ChromeSession {
        fn render(&mut self, url: &str) -> Result<String, FetchError> {
            self.tab
                .navigate_to(url)
                .map_err(browser_err)?
                .wait_until_navigated()
                .map_err(browser_err)?;
            self.tab.get_content().map_err(browser_err)
        }
    }

    impl Drop for ChromeSession {
        fn drop(&mut self) {
            info!("closing browser");
        }
    }
}
