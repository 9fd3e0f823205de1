//! Reqwest-backed country information adapter.
//!
//! This adapter owns transport details only: URL building, the shared request
//! headers, timeout and HTTP status mapping, and JSON decoding into
//! [`CountryInfo`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::CountryDto;
use crate::domain::ports::{CountryInfo, CountryInfoSource, CountryInfoSourceError};

const DEFAULT_USER_AGENT: &str = "roster-backend/0.1";

/// Endpoint and timeout for the country lookup upstream.
#[derive(Debug, Clone)]
pub struct CountryInfoSettings {
    /// Base URL, e.g. `https://restcountries.com/v3.1`.
    pub base_url: Url,
    /// Whole-request timeout.
    pub timeout: Duration,
}

/// Headers sent with every country lookup.
///
/// # Examples
/// ```
/// use roster::outbound::country_info::default_headers;
///
/// let headers = default_headers();
/// assert_eq!(headers["content-type"], "application/json");
/// ```
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

/// Country info source that performs `GET {base_url}/name/{country}`.
pub struct CountryInfoHttpSource {
    client: Client,
    base_url: Url,
}

impl CountryInfoHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(settings: CountryInfoSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .default_headers(default_headers())
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url,
        })
    }

    fn lookup_url(&self, country: &str) -> Result<Url, CountryInfoSourceError> {
        lookup_url(&self.base_url, country)
    }
}

#[async_trait]
impl CountryInfoSource for CountryInfoHttpSource {
    async fn country_info(&self, country: &str) -> Result<CountryInfo, CountryInfoSourceError> {
        let url = self.lookup_url(country)?;
        debug!(%url, "requesting country information");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status == StatusCode::NOT_FOUND {
            return Err(CountryInfoSourceError::not_found(country));
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_country(country, body.as_ref())
    }
}

fn lookup_url(base_url: &Url, country: &str) -> Result<Url, CountryInfoSourceError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| {
            CountryInfoSourceError::invalid_request(format!(
                "base URL cannot carry a path: {base_url}"
            ))
        })?
        .pop_if_empty()
        .push("name")
        .push(country.trim());
    Ok(url)
}

fn parse_country(country: &str, body: &[u8]) -> Result<CountryInfo, CountryInfoSourceError> {
    let decoded: Vec<CountryDto> = serde_json::from_slice(body).map_err(|error| {
        CountryInfoSourceError::decode(format!("invalid country JSON payload: {error}"))
    })?;
    decoded
        .into_iter()
        .next()
        .ok_or_else(|| CountryInfoSourceError::not_found(country))?
        .into_domain()
        .map_err(CountryInfoSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> CountryInfoSourceError {
    if error.is_timeout() {
        CountryInfoSourceError::timeout(error.to_string())
    } else {
        CountryInfoSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CountryInfoSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => CountryInfoSourceError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CountryInfoSourceError::timeout(message)
        }
        _ if status.is_client_error() => CountryInfoSourceError::invalid_request(message),
        _ => CountryInfoSourceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let mut chars = compact.chars();
    let preview: String = chars.by_ref().take(PREVIEW_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}
