// src/config/consts.rs

// Logging
pub const LOG_DIR: &str = "logs";
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const SPORT_LOG_PREFIX: &str = "api_sport";
pub const WEATHER_LOG_PREFIX: &str = "api_tempo";
pub const BOOKS_LOG_PREFIX: &str = "web_scrap";

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("feed_scrape/", env!("CARGO_PKG_VERSION"));

// Sports fixtures API
pub const SPORT_BASE_URL: &str = "https://api.football-data.org";
pub const SPORT_TOKEN_ENV: &str = "FOOTBALL_DATA_TOKEN";
pub const SPORT_AUTH_HEADER: &str = "X-Auth-Token";
pub const SPORT_COMPETITION: &str = "BSA"; // Brasileirão Série A; PL, CL, PD, ...
pub const SPORT_SEASON: u16 = 2024;
pub const SPORT_PAUSE_MS: u64 = 1_000;
pub const SPORT_OUT_FILE: &str = "partidas_brasileirao_2024.csv";

// Weather API
pub const WEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const WEATHER_TOKEN_ENV: &str = "OPENWEATHER_API_KEY";
pub const WEATHER_AUTH_PARAM: &str = "appid";
pub const WEATHER_UNITS: &str = "metric";
pub const WEATHER_LANG: &str = "pt_br";
pub const WEATHER_CITIES: &[(&str, &str)] = &[
    ("São Paulo", "BR"),
    ("Rio de Janeiro", "BR"),
    ("Jundiaí", "BR"),
    ("Cambuí", "BR"),
];
pub const WEATHER_PAUSE_MS: u64 = 1_000;
pub const WEATHER_OUT_FILE: &str = "clima_atual.csv";

// Book catalog
pub const BOOKS_URL_TEMPLATE: &str = "http://books.toscrape.com/catalogue/page-{page}.html";
pub const BOOKS_MAX_PAGES: u32 = 5;
pub const BOOKS_PAUSE_MIN_MS: u64 = 1_500;
pub const BOOKS_PAUSE_MAX_MS: u64 = 3_500;
pub const BOOKS_OUT_FILE: &str = "dados_final.csv";

// Export
pub const API_DELIMITER: u8 = b';';
pub const BOOKS_DELIMITER: u8 = b',';
