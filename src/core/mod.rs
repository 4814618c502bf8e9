// src/core/mod.rs

pub mod flatten;
pub mod net;
pub mod sanitize;

pub use net::FetchError;
