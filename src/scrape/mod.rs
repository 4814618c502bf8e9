// src/scrape/mod.rs
mod books;
mod matches;
mod weather;

pub use books::collect_books;
pub use matches::{collect_matches, MatchPages};
pub use weather::collect_weather;
