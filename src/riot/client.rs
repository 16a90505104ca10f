//! Riot API HTTP client
//!
//! Thin typed wrapper over the handful of Riot endpoints the service
//! consumes. Routing is split between platform hosts (summoner, league)
//! and regional cluster hosts (account, match), see [`super::region`].

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use super::region::{Cluster, Platform};
use super::types::{AccountDto, LeagueEntryDto, MatchDto, SummonerDto};

/// Header carrying the API key on every Riot request
const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Per-request timeout for Riot calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Errors that can occur when talking to the Riot API
#[derive(Debug, Error)]
pub enum RiotError {
    /// The requested resource does not exist
    #[error("Riot API returned 404 Not Found")]
    NotFound,

    /// The API key's rate limit is exhausted
    #[error("Riot API rate limit reached")]
    RateLimited,

    /// Any other non-success status
    #[error("Riot API returned status {0}")]
    Status(StatusCode),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Client for the Riot API endpoints backing summoner lookups
#[derive(Debug, Clone)]
pub struct RiotClient {
    client: Client,
    api_key: String,
    base_override: Option<String>,
}

impl RiotClient {
    /// Create a new client using Riot's production hosts.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_override: None,
        }
    }

    /// Create a client that sends every request to `base_url` instead of
    /// the per-region Riot hosts. Used to point at a mock server in tests.
    #[allow(dead_code)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_override: Some(base_url.into()),
        }
    }

    /// Resolve a Riot ID (game name + tag line) to an account.
    pub async fn get_account(
        &self,
        cluster: Cluster,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, RiotError> {
        let url = self.endpoint(
            &self.cluster_host(cluster),
            &[
                "riot",
                "account",
                "v1",
                "accounts",
                "by-game-name",
                game_name,
                "by-tag",
                tag_line,
            ],
        )?;
        self.get_json(url).await
    }

    /// Fetch the summoner record behind a PUUID.
    pub async fn get_summoner(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> Result<SummonerDto, RiotError> {
        let url = self.endpoint(
            &self.platform_host(platform),
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        )?;
        self.get_json(url).await
    }

    /// Fetch the ranked league entries for a summoner.
    pub async fn get_league_entries(
        &self,
        platform: Platform,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>, RiotError> {
        let url = self.endpoint(
            &self.platform_host(platform),
            &["lol", "league", "v4", "entries", "by-summoner", summoner_id],
        )?;
        self.get_json(url).await
    }

    /// Fetch the most recent match ids for a PUUID, newest first.
    pub async fn get_match_ids(
        &self,
        cluster: Cluster,
        puuid: &str,
        count: u32,
    ) -> Result<Vec<String>, RiotError> {
        let mut url = self.endpoint(
            &self.cluster_host(cluster),
            &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
        )?;
        url.query_pairs_mut()
            .append_pair("start", "0")
            .append_pair("count", &count.to_string());
        self.get_json(url).await
    }

    /// Fetch the full detail record for one match.
    pub async fn get_match(&self, cluster: Cluster, match_id: &str) -> Result<MatchDto, RiotError> {
        let url = self.endpoint(
            &self.cluster_host(cluster),
            &["lol", "match", "v5", "matches", match_id],
        )?;
        self.get_json(url).await
    }

    fn platform_host(&self, platform: Platform) -> String {
        match &self.base_override {
            Some(base) => base.clone(),
            None => format!("https://{}.api.riotgames.com", platform.as_str()),
        }
    }

    fn cluster_host(&self, cluster: Cluster) -> String {
        match &self.base_override {
            Some(base) => base.clone(),
            None => format!("https://{}.api.riotgames.com", cluster.as_str()),
        }
    }

    /// Build a request URL from a host and path segments.
    ///
    /// Segments are percent-encoded individually, so game names with
    /// spaces or special characters stay intact.
    fn endpoint(&self, host: &str, segments: &[&str]) -> Result<Url, RiotError> {
        let mut url =
            Url::parse(host).map_err(|error| RiotError::InvalidUrl(error.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| RiotError::InvalidUrl(host.to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RiotError> {
        let response = self
            .client
            .get(url)
            .header(RIOT_TOKEN_HEADER, &self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(RiotError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(RiotError::RateLimited),
            status if !status.is_success() => Err(RiotError::Status(status)),
            _ => {
                let text = response.text().await?;
                Ok(serde_json::from_str(&text)?)
            }
        }
    }
}
