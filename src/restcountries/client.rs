// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the REST Countries API.

use super::model::{CountryDetails, CountrySummary, SUMMARY_FIELDS};
use crate::error::{Error, Result};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("WonderAtlas/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestCountriesClient {
    /// Creates a client rooted at `base_url` (for example
    /// `https://restcountries.com/v3.1`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid REST Countries URL '{base_url}': {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Underlying HTTP client, shared with tile and image downloads.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fetches the statistics of every country.
    pub async fn fetch_all(&self) -> Result<Vec<CountrySummary>> {
        let mut url = self.endpoint(&["all"]);
        url.query_pairs_mut().append_pair("fields", SUMMARY_FIELDS);

        tracing::debug!(%url, "fetching country statistics");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let countries: Vec<CountrySummary> = response.json().await?;
        tracing::info!(count = countries.len(), "country statistics fetched");
        Ok(countries)
    }

    /// Fetches the full record of the country whose name matches exactly.
    pub async fn fetch_by_name(&self, name: &str) -> Result<CountryDetails> {
        let mut url = self.endpoint(&["name", name]);
        url.query_pairs_mut().append_pair("fullText", "true");

        tracing::debug!(%url, "fetching country details");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::CountryNotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let mut matches: Vec<CountryDetails> = response.json().await?;
        if matches.is_empty() {
            return Err(Error::CountryNotFound(name.to_string()));
        }
        Ok(matches.swap_remove(0))
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
