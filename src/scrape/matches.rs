// src/scrape/matches.rs
use reqwest::blocking::Client;
use tracing::info;

use crate::{
    config::options::SportOptions,
    core::net,
    paginate::{collect_pages, FetchResult, PageSource, Pagination},
    specs::matches,
    store::{Accumulator, Record},
};

/// Fixture pages of one competition/season.
pub struct MatchPages<'a> {
    client: Client,
    opts: &'a SportOptions,
}

impl<'a> MatchPages<'a> {
    pub fn new(opts: &'a SportOptions) -> Result<Self, net::FetchError> {
        Ok(Self { client: net::build_client(&opts.http)?, opts })
    }
}

impl PageSource for MatchPages<'_> {
    type Item = Record;

    fn fetch_page(&mut self, page: u32) -> FetchResult<Record> {
        matches::fetch_page(&self.client, self.opts, page)
    }
}

/// Every match of the configured competition/season, page by page until
/// an empty or failed page.
pub fn collect_matches(opts: &SportOptions) -> Accumulator {
    let mut acc = Accumulator::new();

    let mut source = match MatchPages::new(opts) {
        Ok(s) => s,
        Err(e) => {
            e.report("building HTTP client");
            return acc;
        }
    };

    // no page cap: the API says when it is done
    let pagination = Pagination {
        first_page: opts.first_page,
        delay: opts.delay.clone(),
        ..Pagination::default()
    };
    let paged = collect_pages(&mut source, &pagination);
    info!(
        "{} matches over {} request(s) for {} {}",
        paged.items.len(), paged.requests, opts.competition, opts.season
    );

    acc.extend(paged.items);
    acc
}
