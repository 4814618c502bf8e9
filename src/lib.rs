// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod browser;
pub mod csv;
pub mod file;
pub mod log;
pub mod paginate;
pub mod runner;
pub mod scrape;
pub mod store;
