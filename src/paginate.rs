// src/paginate.rs
//! Page-by-page collection shared by every source.
//!
//! The loop asks a [`PageSource`] for page N, N+1, … and stops at the first
//! page that is empty or fails. A failed page counts as empty: it is logged,
//! never retried, and never surfaced as an error. Between two pages the loop
//! sleeps according to [`Delay`], the only rate-limit courtesy there is.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::core::FetchError;

/// One page worth of items, or the reason there are none.
pub type FetchResult<T> = Result<Vec<T>, FetchError>;

/// Anything that can produce page `n` of a listing with one request.
pub trait PageSource {
    type Item;

    fn fetch_page(&mut self, page: u32) -> FetchResult<Self::Item>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delay {
    None,
    Fixed(Duration),
    /// Uniform in `min..=max`, to look less like a bot.
    Jitter { min: Duration, max: Duration },
}

impl Delay {
    pub fn duration(&self) -> Duration {
        match *self {
            Delay::None => Duration::ZERO,
            Delay::Fixed(d) => d,
            Delay::Jitter { min, max } => {
                if max <= min {
                    return min;
                }
                let lo = min.as_millis() as u64;
                let hi = max.as_millis() as u64;
                Duration::from_millis(rand::rng().random_range(lo..=hi))
            }
        }
    }

    pub fn wait(&self) {
        let d = self.duration();
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub first_page: u32,
    /// Upper bound on requests; `None` runs until an empty or failed page.
    pub max_pages: Option<u32>,
    pub delay: Delay,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { first_page: 1, max_pages: None, delay: Delay::None }
    }
}

#[derive(Debug)]
pub enum StopReason {
    /// `page` returned zero items.
    Empty { page: u32 },
    /// `page` failed and was treated as empty.
    Failed { page: u32, error: FetchError },
    /// `max_pages` requests were made.
    Limit,
}

impl StopReason {
    pub fn describe(&self) -> String {
        match self {
            StopReason::Empty { page } => format!("page {page} was empty"),
            StopReason::Failed { page, error } => format!("page {page} failed ({error})"),
            StopReason::Limit => s!("page limit reached"),
        }
    }
}

#[derive(Debug)]
pub struct Paged<T> {
    pub items: Vec<T>,
    /// Requests actually issued, including the one that stopped the loop.
    pub requests: u32,
    pub stop: StopReason,
}

pub fn collect_pages<S: PageSource + ?Sized>(
    source: &mut S,
    pagination: &Pagination,
) -> Paged<S::Item> {
    let mut items = Vec::new();
    let mut requests = 0u32;
    let mut page = pagination.first_page;
    let may_request = |done: u32| pagination.max_pages.is_none_or(|max| done < max);

    let stop = loop {
        if !may_request(requests) {
            info!("page limit of {} reached", requests);
            break StopReason::Limit;
        }

        info!("requesting page {page}");
        requests += 1;

        match source.fetch_page(page) {
            Ok(batch) if batch.is_empty() => {
                info!("page {page} returned no items; stopping");
                break StopReason::Empty { page };
            }
            Ok(batch) => {
                info!("page {page}: {} items", batch.len());
                items.extend(batch);
                page += 1;
                if may_request(requests) {
                    pagination.delay.wait();
                }
            }
            Err(error) => {
                error.report(&format!("page {page}"));
                break StopReason::Failed { page, error };
            }
        }
    };

    info!("stopped after {requests} request(s): {}", stop.describe());

    Paged { items, requests, stop }
}
