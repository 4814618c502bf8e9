// src/core/net.rs
// Blocking HTTP GET with a fixed timeout. One request per call, no retry.

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::options::HttpOptions;

/// Everything that can turn a page/step into "no data".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected payload: {0}")]
    Decode(String),

    #[error("browser: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Known API refusals (auth, not found, rate limit) carry a hint and
    /// are logged as warnings; everything else is an error.
    fn refusal_hint(&self) -> Option<(u16, &'static str)> {
        let code = self.status()?;
        let hint = match code {
            401 => "API key invalid or missing",
            403 => "token invalid or without permission",
            404 => "resource not found",
            429 => "request limit exceeded",
            _ => return None,
        };
        Some((code, hint))
    }

    /// Log this failure under `context` at its level.
    pub fn report(&self, context: &str) {
        match self.refusal_hint() {
            Some((code, hint)) => warn!("{context}: error {code}: {hint}"),
            None => error!("{context}: {self}"),
        }
    }
}

/// Static credential attached to every request.
#[derive(Clone, Debug)]
pub enum Auth<'a> {
    Header { name: &'static str, token: &'a str },
    Query { name: &'static str, token: &'a str },
}

impl Auth<'_> {
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Auth::Header { name, token } => req.header(*name, *token),
            Auth::Query { name, token } => req.query(&[(*name, *token)]),
        }
    }
}

pub fn build_client(opts: &HttpOptions) -> Result<Client, FetchError> {
    let client = Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Send `req` and decode a JSON body. Anything but 200 is a `FetchError::Status`.
pub fn get_json(req: RequestBuilder) -> Result<Value, FetchError> {
    let resp = req.header(ACCEPT, "application/json").send()?;
    let status = resp.status();
    info!("status code: {}", status.as_u16());

    if status != StatusCode::OK {
        let body = resp.text().unwrap_or_default();
        return Err(FetchError::Status { code: status.as_u16(), body: body.trim().to_string() });
    }

    let text = resp.text()?;
    Ok(serde_json::from_str(&text)?)
}
