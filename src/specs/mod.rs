// src/specs/mod.rs
//! # Source “specs” module
//!
//! Each spec knows **one source**: how to ask it for a page (or a step) and
//! how to read the answer into flat [`Record`](crate::store::Record)s.
//!
//! ## What lives here
//! - **Request shaping** for each endpoint (path, query, static credential).
//! - **Payload reading**: JSON for the REST APIs, HTML for the book catalog.
//! - **Presence checks**: a record missing a required field is dropped (books)
//!   or the whole step fails with `FetchError::Decode` (weather).
//!
//! ## What does **not** live here
//! - **The loop.** Paging, delays and the stop rule live in `paginate`.
//! - **Accumulation and export.** See `store`, `csv` and `file`.
//! - **Logging policy for failures.** Specs return `FetchError`; callers
//!   decide the context string and log through `FetchError::report`.
//!
//! ## Typical call chain
//! ```text
//! runner::run_* → scrape::collect_* → paginate::collect_pages → specs::<source>::fetch_*
//!                                   ↘  Accumulator → DataSet → file::write_export
//! ```
//!
//! ## Testing notes
//! - Parsing functions are pure and take the decoded payload, so they are
//!   tested offline against literal fixtures.
//! - The request builders are exercised against a local mock server.
pub mod books;
pub mod matches;
pub mod weather;
