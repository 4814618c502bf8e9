// src/specs/matches.rs
//! Spec for the fixtures endpoint:
//! `GET {base}/v4/competitions/{competition}/matches?season=&page=`.
//!
//! The body carries a `matches` array; each element is flattened into one
//! record. A missing or `null` array is an empty page, which ends paging.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::info;

use crate::config::consts::SPORT_AUTH_HEADER;
use crate::config::options::SportOptions;
use crate::core::flatten::flatten_object;
use crate::core::net::{self, Auth, FetchError};
use crate::paginate::FetchResult;
use crate::store::Record;

pub fn endpoint(opts: &SportOptions) -> String {
    format!(
        "{}/v4/competitions/{}/matches",
        opts.base_url.trim_end_matches('/'),
        opts.competition
    )
}

pub fn fetch_page(client: &Client, opts: &SportOptions, page: u32) -> FetchResult<Record> {
    let url = endpoint(opts);
    info!("querying {url} (season={}, page={page})", opts.season);

    let req = client
        .get(&url)
        .query(&[("season", opts.season.to_string()), ("page", page.to_string())]);
    let req = Auth::Header { name: SPORT_AUTH_HEADER, token: &opts.token }.apply(req);

    let body = net::get_json(req)?;
    parse_page(&body)
}

pub fn parse_page(body: &Value) -> FetchResult<Record> {
    let matches = match body.get("matches") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(list)) => list,
        Some(_) => return Err(FetchError::Decode(s!("`matches` is not an array"))),
    };

    matches
        .iter()
        .map(|m| match m {
            Value::Object(obj) => Ok(flatten_object(obj)),
            _ => Err(FetchError::Decode(s!("match entry is not an object"))),
        })
        .collect()
}
