//! Synchronous client for the World Bank Open Data API (v2).
//!
//! Covers the `country/{codes}/indicator/{code}` data endpoint and the
//! `/country` listing endpoint, returning tidy [`IndicatorRecord`] rows and
//! [`Entity`] values. Pagination is handled automatically.
//!
//! Notes:
//! - The API sometimes serializes `per_page` as a string; both string and
//!   number are accepted (see `models::Meta`).
//! - 5xx statuses and network failures are retried per [`RetryPolicy`];
//!   exhaustion surfaces as [`FetchError::DataUnavailable`] carrying the
//!   failed (entities, indicator) pair. 4xx statuses fail immediately.

use crate::error::{FetchError, Result};
use crate::models::{CountryRow, DateSpec, Entity, Entry, IndicatorRecord, Meta};
use crate::retry::RetryPolicy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Abstraction over the remote data source so the service layer (and its
/// tests) can swap the HTTP client for a stub.
pub trait IndicatorSource: Send + Sync {
    /// Fetch observations for every (entity, indicator) combination.
    fn fetch_indicators(
        &self,
        entities: &[String],
        indicators: &[String],
        date: Option<DateSpec>,
    ) -> Result<Vec<IndicatorRecord>>;

    /// List selectable countries.
    fn list_countries(&self) -> Result<Vec<Entity>>;
}

/// Live API root.
pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
    retry: RetryPolicy,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            Duration::from_secs(10),
            RetryPolicy::default(),
        )
    }
}

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc_join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(|s| percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string())
        .collect::<Vec<_>>()
        .join(";")
}

impl Client {
    /// Build a client with an explicit base URL, per-request timeout and
    /// retry policy. `Default` uses the live API, a 10s timeout and 3
    /// attempts with 1s/2s backoff.
    pub fn new(base_url: &str, timeout: Duration, retry: RetryPolicy) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .redirect(Policy::limited(5))
            .user_agent(concat!("geocmp_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            retry,
        }
    }

    /// One GET, one classification. Retrying is the caller's job.
    fn get_json_once(&self, url: &str) -> Result<Value> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if status.is_success() {
            return resp
                .json()
                .map_err(|e| FetchError::Decode(format!("GET {url}: {e}")));
        }
        Err(FetchError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }

    fn get_json(&self, url: &str) -> Result<Value> {
        self.retry.run(|| self.get_json_once(url))
    }

    /// Split a `[Meta, [row, ...]]` response, surfacing API error payloads.
    fn split_response(v: &Value) -> Result<(Meta, &Value)> {
        let arr = v
            .as_array()
            .ok_or_else(|| FetchError::Decode("response is not a top-level array".into()))?;
        let first = arr
            .first()
            .ok_or_else(|| FetchError::Decode("response array is empty".into()))?;
        if first.get("message").is_some() {
            return Err(FetchError::Api(first.to_string()));
        }
        let meta: Meta = serde_json::from_value(first.clone())
            .map_err(|e| FetchError::Decode(format!("parse meta: {e}")))?;
        Ok((meta, arr.get(1).unwrap_or(&Value::Null)))
    }

    /// Fetch observations for one indicator across all entities, joined into
    /// a single batched call and paginated until complete.
    fn fetch_one_indicator(
        &self,
        entity_spec: &str,
        indicator: &str,
        date: Option<DateSpec>,
    ) -> Result<Vec<IndicatorRecord>> {
        let mut url = format!(
            "{}/country/{}/indicator/{}?format=json&per_page=1000",
            self.base_url,
            entity_spec,
            percent_encoding::utf8_percent_encode(indicator, SAFE)
        );
        if let Some(d) = date {
            url.push_str(&format!("&date={}", d.to_query_param()));
        }

        // Safety cap to avoid pathological jobs
        let max_pages = 1000u32;

        let mut page = 1u32;
        let mut out: Vec<IndicatorRecord> = Vec::new();
        loop {
            if page > max_pages {
                return Err(FetchError::Decode(format!(
                    "page limit exceeded ({max_pages})"
                )));
            }
            let page_url = format!("{url}&page={page}");
            let v = self.get_json(&page_url).map_err(|e| {
                // Exhausted transient failures become per-pair DataUnavailable;
                // everything else keeps its classification.
                if e.is_retryable() {
                    log::warn!("giving up on {entity_spec}/{indicator}: {e}");
                    FetchError::DataUnavailable {
                        entity: entity_spec.to_string(),
                        indicator: indicator.to_string(),
                    }
                } else {
                    e
                }
            })?;

            let (meta, rows) = Self::split_response(&v)?;
            let entries: Vec<Entry> = if rows.is_null() {
                vec![]
            } else {
                serde_json::from_value(rows.clone())
                    .map_err(|e| FetchError::Decode(format!("parse entries: {e}")))?
            };
            out.extend(entries.into_iter().map(IndicatorRecord::from));

            if page >= meta.pages {
                break;
            }
            page += 1;
        }
        Ok(out)
    }
}

impl IndicatorSource for Client {
    /// Fetch indicator observations.
    ///
    /// - `entities`: ISO2/ISO3 country codes or aggregates (`"DEU"`, `"USA"`,
    ///   `"EUU"`...). Joined for the API (e.g., `"DEU;USA"`).
    /// - `indicators`: indicator ids (`"SP.POP.TOTL"`, ...); one request per
    ///   indicator, results merged.
    /// - `date`: single year or inclusive range; `None` means all years.
    fn fetch_indicators(
        &self,
        entities: &[String],
        indicators: &[String],
        date: Option<DateSpec>,
    ) -> Result<Vec<IndicatorRecord>> {
        if entities.is_empty() {
            return Err(FetchError::InvalidRequest(
                "at least one entity code required".into(),
            ));
        }
        if indicators.is_empty() {
            return Err(FetchError::InvalidRequest(
                "at least one indicator code required".into(),
            ));
        }
        if let Some(d) = date
            && !d.is_valid()
        {
            return Err(FetchError::InvalidRequest(format!(
                "date range start after end: {}",
                d.to_query_param()
            )));
        }

        let entity_spec = enc_join(entities.iter().map(|s| s.as_str()));
        let mut out = Vec::new();
        for indicator in indicators {
            out.extend(self.fetch_one_indicator(&entity_spec, indicator, date)?);
        }
        Ok(out)
    }

    /// List countries, filtering out the aggregates the endpoint mixes in.
    fn list_countries(&self) -> Result<Vec<Entity>> {
        let base = format!("{}/country?format=json&per_page=400", self.base_url);

        let mut page = 1u32;
        let mut out: Vec<Entity> = Vec::new();
        loop {
            let url = format!("{base}&page={page}");
            let v = self.get_json(&url)?;
            let (meta, rows) = Self::split_response(&v)?;
            let countries: Vec<CountryRow> = if rows.is_null() {
                vec![]
            } else {
                serde_json::from_value(rows.clone())
                    .map_err(|e| FetchError::Decode(format!("parse countries: {e}")))?
            };
            out.extend(
                countries
                    .into_iter()
                    .filter(CountryRow::is_country)
                    .map(Entity::from),
            );
            if page >= meta.pages {
                break;
            }
            page += 1;
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}
