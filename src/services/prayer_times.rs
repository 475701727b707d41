use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;
use crate::utils::logging::log_upstream_error;

/// Prayer name → `HH:MM` clock value, as returned for one city and day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Timings(BTreeMap<String, String>);

impl Timings {
    /// Clock value for `name`, if the upstream reported it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Timings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Timings(
            iter.into_iter()
                .map(|(name, time)| (name.into(), time.into()))
                .collect(),
        )
    }
}

/// Why timings could not be obtained. Every variant means "unavailable".
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to prayer-times service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prayer-times service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("prayer-times response could not be decoded: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("prayer-times response has no timings")]
    MissingTimings,
}

/// Source of daily prayer timings for a city.
#[async_trait]
pub trait TimingsProvider: Send + Sync + Debug {
    /// Fetches today's timings for `city` in `country`.
    ///
    /// Neither argument is validated; both are passed to the upstream as-is.
    async fn fetch_timings(&self, city: &str, country: &str) -> Result<Timings, ProviderError>;
}

/// [`TimingsProvider`] backed by the Aladhan `timingsByCity` endpoint.
///
/// One attempt per call, no retries. The request timeout is set on the
/// underlying client.
#[derive(Debug, Clone)]
pub struct AladhanProvider {
    http: Client,
    base_url: String,
    method: u8,
}

impl AladhanProvider {
    pub fn new(
        base_url: impl Into<String>,
        method: u8,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            method,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = Self::new(
            config.prayer_api_base_url.clone(),
            config.calculation_method,
            config.request_timeout,
        )?;
        Ok(provider)
    }

    /// URL of the timings resource for `date`.
    pub fn timings_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/timingsByCity/{}",
            self.base_url,
            date.format("%d-%m-%Y")
        )
    }

    /// Fetches timings for an explicit calendar date.
    pub async fn fetch_timings_on(
        &self,
        date: NaiveDate,
        city: &str,
        country: &str,
    ) -> Result<Timings, ProviderError> {
        let method = self.method.to_string();

        let res = self
            .http
            .get(self.timings_url(date))
            .query(&[("city", city), ("country", country), ("method", method.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_timings_body(&body)
    }
}

#[async_trait]
impl TimingsProvider for AladhanProvider {
    async fn fetch_timings(&self, city: &str, country: &str) -> Result<Timings, ProviderError> {
        let today = Local::now().date_naive();
        let result = self.fetch_timings_on(today, city, country).await;

        if let Err(e) = &result {
            let location = format!("{city}, {country}");
            log_upstream_error("fetch_timings", &e.to_string(), Some(&location));
        }
        result
    }
}

#[derive(Debug, Deserialize)]
struct AladhanResponse {
    data: Option<AladhanData>,
}

#[derive(Debug, Deserialize)]
struct AladhanData {
    timings: Option<Timings>,
}

/// Pulls `data.timings` out of an Aladhan response body.
///
/// A body without that object, or with an empty one, is
/// [`ProviderError::MissingTimings`].
pub fn parse_timings_body(body: &str) -> Result<Timings, ProviderError> {
    let parsed: AladhanResponse = serde_json::from_str(body)?;

    parsed
        .data
        .and_then(|data| data.timings)
        .filter(|timings| !timings.is_empty())
        .ok_or(ProviderError::MissingTimings)
}

fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    if body.chars().count() <= MAX_CHARS {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    }
}
