// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::csv::Quote;
use crate::paginate::Delay;

/* ---------------- Shared ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub path: PathBuf,
    pub delimiter: u8,
    /// Prefix the file with a UTF-8 byte order mark (spreadsheet-friendly).
    pub bom: bool,
    pub quote: Quote,
}

impl ExportOptions {
    /// `;`-separated, BOM-prefixed, minimal quoting. Used by the API collectors.
    pub fn api(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: API_DELIMITER,
            bom: true,
            quote: Quote::Necessary,
        }
    }

    /// `,`-separated, every field quoted, no BOM. Used by the book catalog.
    pub fn quoted(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: BOOKS_DELIMITER,
            bom: false,
            quote: Quote::Always,
        }
    }
}

fn token_from_env(var: &str) -> String {
    match std::env::var(var) {
        Ok(v) => v.trim().to_string(),
        Err(_) => {
            tracing::warn!("{var} is not set; requests will go out without a token");
            s!()
        }
    }
}

/* ---------------- Sports fixtures ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct SportOptions {
    pub base_url: String,
    pub token: String,
    pub competition: String,
    pub season: u16,
    pub first_page: u32,
    pub delay: Delay,
    pub http: HttpOptions,
    pub export: ExportOptions,
}

impl Default for SportOptions {
    fn default() -> Self {
        Self {
            base_url: s!(SPORT_BASE_URL),
            token: s!(),
            competition: s!(SPORT_COMPETITION),
            season: SPORT_SEASON,
            first_page: 1,
            delay: Delay::Fixed(Duration::from_millis(SPORT_PAUSE_MS)),
            http: HttpOptions::default(),
            export: ExportOptions::api(SPORT_OUT_FILE),
        }
    }
}

impl SportOptions {
    pub fn from_env() -> Self {
        Self { token: token_from_env(SPORT_TOKEN_ENV), ..Self::default() }
    }
}

/* ---------------- Weather ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub country: String,
}

impl City {
    pub fn new(name: &str, country: &str) -> Self {
        Self { name: s!(name), country: s!(country) }
    }

    /// `q` parameter, e.g. "São Paulo,BR".
    pub fn query(&self) -> String {
        join!(&self.name, ",", &self.country)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherOptions {
    pub base_url: String,
    pub token: String,
    pub cities: Vec<City>,
    pub units: String,
    pub lang: String,
    pub delay: Delay,
    pub http: HttpOptions,
    pub export: ExportOptions,
}

impl Default for WeatherOptions {
    fn default() -> Self {
        Self {
            base_url: s!(WEATHER_BASE_URL),
            token: s!(),
            cities: WEATHER_CITIES.iter().map(|(n, c)| City::new(n, c)).collect(),
            units: s!(WEATHER_UNITS),
            lang: s!(WEATHER_LANG),
            delay: Delay::Fixed(Duration::from_millis(WEATHER_PAUSE_MS)),
            http: HttpOptions::default(),
            export: ExportOptions::api(WEATHER_OUT_FILE),
        }
    }
}

impl WeatherOptions {
    pub fn from_env() -> Self {
        Self { token: token_from_env(WEATHER_TOKEN_ENV), ..Self::default() }
    }
}

/* ---------------- Book catalog ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct BooksOptions {
    /// Page URL with a `{page}` placeholder.
    pub url_template: String,
    pub first_page: u32,
    pub max_pages: Option<u32>,
    pub delay: Delay,
    /// `false` opens a visible window (handy when selectors break).
    pub headless: bool,
    pub export: ExportOptions,
}

impl Default for BooksOptions {
    fn default() -> Self {
        Self {
            url_template: s!(BOOKS_URL_TEMPLATE),
            first_page: 1,
            max_pages: Some(BOOKS_MAX_PAGES),
            delay: Delay::Jitter {
                min: Duration::from_millis(BOOKS_PAUSE_MIN_MS),
                max: Duration::from_millis(BOOKS_PAUSE_MAX_MS),
            },
            headless: true,
            export: ExportOptions::quoted(BOOKS_OUT_FILE),
        }
    }
}

impl BooksOptions {
    pub fn page_url(&self, page: u32) -> String {
        self.url_template.replace("{page}", &page.to_string())
    }
}
