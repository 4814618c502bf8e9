// src/specs/weather.rs
//! Spec for current weather: `GET {base}/data/2.5/weather?q={city},{country}`.
//!
//! Not paginated: one request per city, one record per success. Every field
//! below must be present; otherwise the city yields no record.

use chrono::{Local, NaiveDateTime};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::info;

use crate::config::consts::WEATHER_AUTH_PARAM;
use crate::config::options::{City, WeatherOptions};
use crate::core::net::{self, Auth, FetchError};
use crate::store::Record;

pub const COLUMNS: &[&str] = &[
    "cidade",
    "temperatura",
    "sensacao_termica",
    "temperatura_min",
    "temperatura_max",
    "umidade",
    "clima",
    "velocidade_vento",
    "data_hora",
];

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Deserialize)]
struct Reading {
    name: String,
    main: Main,
    weather: Vec<Condition>,
    wind: Wind,
}

// Numbers stay `Number` so the CSV shows exactly what the API sent.
#[derive(Debug, Deserialize)]
struct Main {
    temp: Number,
    feels_like: Number,
    temp_min: Number,
    temp_max: Number,
    humidity: Number,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: Number,
}

pub fn endpoint(opts: &WeatherOptions) -> String {
    join!(opts.base_url.trim_end_matches('/'), "/data/2.5/weather")
}

pub fn fetch_city(client: &Client, opts: &WeatherOptions, city: &City) -> Result<Record, FetchError> {
    info!("querying weather for {} - {}", city.name, city.country);

    let req = client.get(endpoint(opts)).query(&[
        ("q", city.query().as_str()),
        ("units", opts.units.as_str()),
        ("lang", opts.lang.as_str()),
    ]);
    let req = Auth::Query { name: WEATHER_AUTH_PARAM, token: &opts.token }.apply(req);

    let body = net::get_json(req)?;
    let record = parse_reading(body, Local::now().naive_local())?;
    info!("reading for {} extracted", city.name);
    Ok(record)
}

/// Pick the reported fields out of a weather payload, stamped with `collected_at`.
pub fn parse_reading(body: Value, collected_at: NaiveDateTime) -> Result<Record, FetchError> {
    let r: Reading = serde_json::from_value(body)?;
    let clima = r
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Decode(s!("`weather` list is empty")))?
        .description;

    let values = [
        r.name,
        r.main.temp.to_string(),
        r.main.feels_like.to_string(),
        r.main.temp_min.to_string(),
        r.main.temp_max.to_string(),
        r.main.humidity.to_string(),
        clima,
        r.wind.speed.to_string(),
        collected_at.format(STAMP_FORMAT).to_string(),
    ];

    Ok(COLUMNS.iter().map(|c| s!(*c)).zip(values).collect())
}
