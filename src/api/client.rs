//! Blocking TMDb client with a fixed linear retry policy

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::MovieApi;
use super::filters::{filter_cast, filter_credits};
use super::retry::retry_with_delays;
use super::types::{CastMember, MovieCredit, cast_entries};
use crate::constants::api::{BASE_URL, LANGUAGE, REQUEST_TIMEOUT, RETRY_DELAYS};
use crate::error::CoactorError;

/// Connection settings for [`TmdbClient`]
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, without a trailing slash
    pub base_url: String,
    pub api_key: String,
    pub language: String,
    pub timeout: Duration,
    /// Delay after each failed attempt; its length is the attempt count
    pub retry_delays: Vec<Duration>,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_key: api_key.into(),
            language: LANGUAGE.to_string(),
            timeout: REQUEST_TIMEOUT,
            retry_delays: RETRY_DELAYS.to_vec(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_retry_delays(mut self, retry_delays: Vec<Duration>) -> Self {
        self.retry_delays = retry_delays;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// TMDb v3 client
///
/// Failed calls degrade to an empty result; they never abort the caller.
#[derive(Debug)]
pub struct TmdbClient {
    config: ApiConfig,
    http: Client,
}

impl TmdbClient {
    pub fn new(config: ApiConfig) -> Result<Self, CoactorError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET `path` and parse the body as JSON
    ///
    /// Caller params are merged with `language` and `api_key`; caller values
    /// win. Returns an empty object once every attempt has failed.
    pub fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Value {
        let url = format!("{}{}", self.config.base_url, path);
        let query = self.merged_params(params);
        debug!(%path, "GET");

        // The last delay is slept too, so an exhausted call waits the full schedule
        retry_with_delays(&self.config.retry_delays, |_| self.fetch_once(&url, &query))
            .unwrap_or_else(|| {
                warn!(%path, attempts = self.config.retry_delays.len(), "giving up, using empty result");
                Value::Object(Map::new())
            })
    }

    fn merged_params(&self, params: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = params
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        for (key, value) in [
            ("language", self.config.language.as_str()),
            ("api_key", self.config.api_key.as_str()),
        ] {
            if !query.iter().any(|(existing, _)| existing == key) {
                query.push((key.to_string(), value.to_string()));
            }
        }

        query
    }

    fn fetch_once(&self, url: &str, query: &[(String, String)]) -> Result<Value, CoactorError> {
        let response = self.http.get(url).query(query).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CoactorError::ApiError {
                message: format!("HTTP {status}"),
            });
        }

        let body = response.bytes()?;
        if body.is_empty() {
            return Err(CoactorError::ApiError {
                message: "empty response body".to_string(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

impl MovieApi for TmdbClient {
    fn get_movie_cast(&self, movie_id: &str, limit: usize, exclude_ids: &[String]) -> Vec<CastMember> {
        let payload = self.get_json(&format!("/movie/{movie_id}/credits"), &[]);
        filter_cast(cast_entries(&payload), limit, exclude_ids)
    }

    fn get_movie_credits_for_person(
        &self,
        person_id: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Vec<MovieCredit> {
        let payload = self.get_json(&format!("/person/{person_id}/movie_credits"), &[]);
        filter_credits(cast_entries(&payload), start_date, end_date)
    }
}
