//! Summoner lookup pipeline
//!
//! Orchestrates the Riot calls behind a summoner lookup (account,
//! summoner, league entries, match history), caches each step with its
//! own TTL, and assembles the enriched payload the API serves.

use std::collections::HashMap;

use chrono::Utc;
use futures::future::join_all;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CachedValue, TimedCache};
use crate::riot::{Cluster, LeagueEntryDto, MatchDto, Platform, RiotClient, RiotError};
use crate::stats::{self, SummonerPayload, SummonerProfile};

/// Assembled responses stay valid for 5 minutes
const RESPONSE_TTL_MINUTES: i64 = 5;
/// Resolved summoner identities change rarely
const SUMMONER_TTL_MINUTES: i64 = 15;
const RANKED_TTL_MINUTES: i64 = 10;
const MATCH_IDS_TTL_MINUTES: i64 = 10;
/// Finished matches are immutable, cache them the longest
const MATCH_DETAIL_TTL_MINUTES: i64 = 60;

/// A summoner to look up on startup, parsed from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchTarget {
    pub platform: Platform,
    pub name: String,
}

impl PrefetchTarget {
    /// Parses a comma-separated list of "region:name" pairs.
    ///
    /// Entries with an unknown region or an empty name are skipped with
    /// a warning. Names may themselves contain colons, only the first
    /// one splits region from name.
    pub fn parse_list(config: &str) -> Vec<PrefetchTarget> {
        let mut targets = Vec::new();
        for entry in config.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let Some((region_part, name_part)) = entry.split_once(':') else {
                warn!("Ignoring prefetch entry without a region prefix: {entry}");
                continue;
            };
            let Some(platform) = Platform::from_str(region_part) else {
                warn!("Ignoring prefetch entry with unsupported region: {entry}");
                continue;
            };
            let name = name_part.trim();
            if name.is_empty() {
                warn!("Ignoring prefetch entry with empty name: {entry}");
                continue;
            }
            targets.push(PrefetchTarget {
                platform,
                name: name.to_string(),
            });
        }
        targets
    }
}

/// Cached, rate-limit-friendly access to summoner statistics.
///
/// Every Riot round trip sits behind its own [`TimedCache`], so repeat
/// lookups inside a TTL window cost no upstream requests at all.
pub struct SummonerService {
    riot: RiotClient,
    match_history_count: u32,
    match_detail_concurrency: usize,
    response_cache: TimedCache<SummonerPayload>,
    summoner_cache: TimedCache<SummonerProfile>,
    ranked_cache: TimedCache<Vec<LeagueEntryDto>>,
    match_ids_cache: TimedCache<Vec<String>>,
    match_detail_cache: TimedCache<MatchDto>,
    /// Banner clip URL per PUUID, survives name changes
    banner_clips: RwLock<HashMap<String, String>>,
}

impl SummonerService {
    /// Create a service with empty caches.
    pub fn new(riot: RiotClient, match_history_count: u32, match_detail_concurrency: usize) -> Self {
        Self {
            riot,
            match_history_count,
            match_detail_concurrency: match_detail_concurrency.max(1),
            response_cache: TimedCache::minutes(RESPONSE_TTL_MINUTES),
            summoner_cache: TimedCache::minutes(SUMMONER_TTL_MINUTES),
            ranked_cache: TimedCache::minutes(RANKED_TTL_MINUTES),
            match_ids_cache: TimedCache::minutes(MATCH_IDS_TTL_MINUTES),
            match_detail_cache: TimedCache::minutes(MATCH_DETAIL_TTL_MINUTES),
            banner_clips: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a previously assembled response for this name.
    pub async fn cached_response(
        &self,
        platform: Platform,
        name: &str,
    ) -> Option<CachedValue<SummonerPayload>> {
        self.response_cache.get(&summoner_key(platform, name)).await
    }

    /// Store an assembled response under both the searched name and the
    /// canonical profile name, so either spelling hits the cache.
    pub async fn store_response(
        &self,
        platform: Platform,
        input_name: &str,
        payload: &SummonerPayload,
    ) {
        let primary = summoner_key(platform, input_name);
        let canonical = summoner_key(platform, &payload.profile.name);
        if canonical != primary {
            self.response_cache.insert(canonical, payload.clone()).await;
        }
        self.response_cache.insert(primary, payload.clone()).await;
    }

    /// Run the full lookup pipeline for one summoner and build the
    /// enriched payload. Intermediate caches short-circuit the Riot
    /// calls where possible.
    pub async fn hydrate(
        &self,
        platform: Platform,
        name: &str,
    ) -> Result<SummonerPayload, RiotError> {
        let profile = self.resolve_profile(platform, name).await?;
        let ranked = self.fetch_ranked(platform, &profile.summoner_id).await?;
        let matches = self.fetch_matches(platform, &profile.puuid).await?;

        let mut payload = stats::enrich(&profile, platform, &ranked, &matches, Utc::now());
        if let Some(clip) = self.banner_clips.read().await.get(&profile.puuid) {
            payload.profile.banner_clip = clip.clone();
        }
        Ok(payload)
    }

    /// Store a banner clip for a summoner and patch any cached response
    /// so the clip shows up without a refetch.
    pub async fn set_banner(
        &self,
        platform: Platform,
        name: &str,
        clip_url: &str,
    ) -> Result<(), RiotError> {
        let profile = self.resolve_profile(platform, name).await?;
        self.banner_clips
            .write()
            .await
            .insert(profile.puuid.clone(), clip_url.to_string());

        if let Some(cached) = self.cached_response(platform, name).await {
            let mut payload = cached.data;
            payload.profile.banner_clip = clip_url.to_string();
            self.store_response(platform, name, &payload).await;
        }
        Ok(())
    }

    /// Warm the caches for the configured summoners, one at a time.
    ///
    /// Missing summoners are skipped; a rate limit stops the whole run
    /// since further requests would only burn the retry window.
    pub async fn prefetch(&self, targets: &[PrefetchTarget]) {
        for target in targets {
            let region = target.platform.display();
            match self.hydrate(target.platform, &target.name).await {
                Ok(payload) => {
                    let canonical = payload.profile.name.clone();
                    self.store_response(target.platform, &target.name, &payload).await;
                    info!("Prefetched {canonical} ({region})");
                }
                Err(RiotError::NotFound) => {
                    warn!("Prefetch skipped: {} ({region}) not found", target.name);
                }
                Err(RiotError::RateLimited) => {
                    warn!("Prefetch halted: Riot API rate limit reached");
                    break;
                }
                Err(error) => {
                    warn!("Prefetch error for {} ({region}): {error}", target.name);
                }
            }
        }
    }

    /// Resolve a searched name to a summoner identity via Account-V1
    /// and Summoner-V4, caching the result under both the searched and
    /// the canonical spelling.
    async fn resolve_profile(
        &self,
        platform: Platform,
        name: &str,
    ) -> Result<SummonerProfile, RiotError> {
        let input_key = summoner_key(platform, name);
        if let Some(cached) = self.summoner_cache.get(&input_key).await {
            debug!("Summoner cache hit for {input_key}");
            return Ok(cached.data);
        }

        let (game_name, tag_line) = split_riot_id(name);
        let account = self
            .riot
            .get_account(platform.account_cluster(), game_name, tag_line)
            .await?;
        let summoner = self.riot.get_summoner(platform, &account.puuid).await?;

        let display_name = match (&account.game_name, &account.tag_line) {
            (Some(game_name), Some(tag_line)) => format!("{game_name}#{tag_line}"),
            _ => name.trim().to_string(),
        };
        let profile = SummonerProfile {
            name: display_name,
            puuid: summoner.puuid,
            summoner_id: summoner.id,
            level: summoner.summoner_level,
        };

        let canonical_key = summoner_key(platform, &profile.name);
        if canonical_key != input_key {
            self.summoner_cache
                .insert(canonical_key, profile.clone())
                .await;
        }
        self.summoner_cache.insert(input_key, profile.clone()).await;
        Ok(profile)
    }

    async fn fetch_ranked(
        &self,
        platform: Platform,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>, RiotError> {
        let key = ranked_key(platform, summoner_id);
        if let Some(cached) = self.ranked_cache.get(&key).await {
            return Ok(cached.data);
        }
        let entries = self.riot.get_league_entries(platform, summoner_id).await?;
        self.ranked_cache.insert(key, entries.clone()).await;
        Ok(entries)
    }

    /// Fetch recent match details, at most `match_detail_concurrency`
    /// requests in flight at once.
    async fn fetch_matches(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> Result<Vec<MatchDto>, RiotError> {
        let cluster = platform.cluster();
        let ids = self.fetch_match_ids(cluster, puuid).await?;

        let mut matches = Vec::with_capacity(ids.len());
        for batch in ids.chunks(self.match_detail_concurrency) {
            let details = join_all(
                batch
                    .iter()
                    .map(|match_id| self.fetch_match_detail(cluster, match_id)),
            )
            .await;
            for detail in details {
                if let Some(detail) = detail? {
                    matches.push(detail);
                }
            }
        }
        Ok(matches)
    }

    async fn fetch_match_ids(
        &self,
        cluster: Cluster,
        puuid: &str,
    ) -> Result<Vec<String>, RiotError> {
        let key = match_ids_key(cluster, puuid);
        if let Some(cached) = self.match_ids_cache.get(&key).await {
            return Ok(cached.data);
        }
        let ids = self
            .riot
            .get_match_ids(cluster, puuid, self.match_history_count)
            .await?;
        self.match_ids_cache.insert(key, ids.clone()).await;
        Ok(ids)
    }

    /// `None` when the match id no longer resolves; the id list can
    /// outlive the details it points at.
    async fn fetch_match_detail(
        &self,
        cluster: Cluster,
        match_id: &str,
    ) -> Result<Option<MatchDto>, RiotError> {
        let key = match_detail_key(match_id);
        if let Some(cached) = self.match_detail_cache.get(&key).await {
            return Ok(Some(cached.data));
        }
        match self.riot.get_match(cluster, match_id).await {
            Ok(detail) => {
                self.match_detail_cache.insert(key, detail.clone()).await;
                Ok(Some(detail))
            }
            Err(RiotError::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Normalized name form used in summoner-scoped cache keys.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Splits a searched name into game name and tag line.
///
/// Without a '#' the whole input is the game name and the tag is empty,
/// which Riot rejects for accounts that do require one.
fn split_riot_id(name: &str) -> (&str, &str) {
    if !name.contains('#') {
        return (name, "");
    }
    let mut parts = name.split('#');
    let game_name = parts.next().unwrap_or_default();
    let tag_line = parts.next().unwrap_or_default();
    (game_name, tag_line)
}

fn summoner_key(platform: Platform, name: &str) -> String {
    format!("summoner:{}:{}", platform.as_str(), normalize_name(name))
}

fn ranked_key(platform: Platform, summoner_id: &str) -> String {
    format!("ranked:{}:{}", platform.as_str(), summoner_id)
}

fn match_ids_key(cluster: Cluster, puuid: &str) -> String {
    format!("matchIds:{}:{}", cluster.as_str(), puuid)
}

fn match_detail_key(match_id: &str) -> String {
    format!("match:{match_id}")
}
