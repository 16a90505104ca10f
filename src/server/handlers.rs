//! HTTP request handlers
//!
//! The summoner lookup never fails hard once the request itself is valid:
//! upstream trouble (missing API key, rate limits, Riot outages) degrades to
//! the bundled demo payload with a `meta.source` of `"fallback"` so the
//! front-end can tell live data from the canned snapshot.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use url::Url;

use crate::riot::{Platform, RiotError};
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::stats::{demo_payload, ResponseMeta, SummonerResponse};

/// Fallback reason when the server was started without a Riot API key.
const NO_KEY_REASON: &str = "Riot API key not configured.";
/// Fallback reason when Riot throttles us mid-request.
const RATE_LIMIT_REASON: &str = "Riot API rate limit reached. Showing demo data instead.";
/// Fallback reason for any other upstream failure.
const UPSTREAM_ERROR_REASON: &str = "Unexpected error talking to Riot API. Showing demo data.";

/// Query parameters for `GET /api/summoner`.
#[derive(Debug, Deserialize)]
pub struct SummonerQuery {
    region: Option<String>,
    name: Option<String>,
}

/// Request body for `POST /api/summoner/banner`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerRequest {
    region: Option<String>,
    name: Option<String>,
    banner_clip: Option<String>,
}

/// Response body for a successful banner update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub ok: bool,
    pub banner_clip: String,
}

/// Response body for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Looks up a summoner and returns the aggregated profile payload.
///
/// Served from the response cache when a fresh entry exists; otherwise the
/// full Riot pipeline runs and the result is cached under both the requested
/// and canonical spellings of the name.
pub async fn get_summoner(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SummonerQuery>,
) -> Result<Json<SummonerResponse>, ApiError> {
    let region = query.region.unwrap_or_default();
    let name = query.name.unwrap_or_default();
    if region.is_empty() || name.is_empty() {
        return Err(ApiError::MissingQueryParams);
    }

    let Some(platform) = Platform::from_str(&region) else {
        return Err(ApiError::UnsupportedRegion(region));
    };

    if !state.has_api_key() {
        return Ok(Json(SummonerResponse {
            meta: ResponseMeta::fallback(NO_KEY_REASON),
            payload: demo_payload(),
        }));
    }

    if let Some(cached) = state.service.cached_response(platform, &name).await {
        return Ok(Json(SummonerResponse {
            meta: ResponseMeta::cache(iso_timestamp(cached.cached_at)),
            payload: cached.data,
        }));
    }

    match state.service.hydrate(platform, &name).await {
        Ok(payload) => {
            state.service.store_response(platform, &name, &payload).await;
            Ok(Json(SummonerResponse {
                meta: ResponseMeta::riot(iso_timestamp(Utc::now())),
                payload,
            }))
        }
        Err(RiotError::NotFound) => Err(ApiError::SummonerNotFound {
            name,
            region: platform.display().to_string(),
        }),
        Err(RiotError::RateLimited) => Ok(Json(SummonerResponse {
            meta: ResponseMeta::fallback(RATE_LIMIT_REASON),
            payload: demo_payload(),
        })),
        Err(err) => {
            error!("Riot API error: {err}");
            Ok(Json(SummonerResponse {
                meta: ResponseMeta::fallback(UPSTREAM_ERROR_REASON),
                payload: demo_payload(),
            }))
        }
    }
}

/// Stores a banner clip URL for a summoner and patches any cached profile.
pub async fn set_banner(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BannerRequest>,
) -> Result<Json<BannerResponse>, ApiError> {
    let region = body.region.unwrap_or_default();
    let name = body.name.unwrap_or_default();
    let banner_clip = body.banner_clip.unwrap_or_default();
    if region.is_empty() || name.is_empty() || banner_clip.is_empty() {
        return Err(ApiError::MissingBannerFields);
    }

    let Some(platform) = Platform::from_str(&region) else {
        return Err(ApiError::UnsupportedRegion(region));
    };

    if !is_http_url(&banner_clip) {
        return Err(ApiError::InvalidBannerUrl);
    }

    match state.service.set_banner(platform, &name, &banner_clip).await {
        Ok(()) => Ok(Json(BannerResponse {
            ok: true,
            banner_clip,
        })),
        Err(RiotError::NotFound) => Err(ApiError::BannerSummonerNotFound),
        Err(err) => Err(ApiError::SetBannerFailed(err)),
    }
}

/// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: iso_timestamp(Utc::now()),
    })
}

/// Formats a timestamp the way JavaScript's `toISOString` does,
/// millisecond precision with a `Z` suffix.
fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::riot::RiotClient;
    use crate::service::SummonerService;

    fn offline_state(has_api_key: bool) -> Arc<AppState> {
        let riot = RiotClient::new(if has_api_key { "RGAPI-test" } else { "" });
        let service = SummonerService::new(riot, 10, 4);
        Arc::new(AppState::new(service, has_api_key))
    }

    #[test]
    fn test_iso_timestamp_matches_javascript_format() {
        let at = Utc.with_ymd_and_hms(2026, 7, 1, 12, 30, 45).unwrap();
        assert_eq!(iso_timestamp(at), "2026-07-01T12:30:45.000Z");
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://cdn.example.com/clip.mp4"));
        assert!(is_http_url("http://cdn.example.com/clip.mp4"));
        assert!(!is_http_url("ftp://cdn.example.com/clip.mp4"));
        assert!(!is_http_url("not a url"));
        assert!(!is_http_url("//cdn.example.com/clip.mp4"));
    }

    #[tokio::test]
    async fn test_get_summoner_requires_region_and_name() {
        let state = offline_state(true);

        let result = get_summoner(
            State(Arc::clone(&state)),
            Query(SummonerQuery {
                region: None,
                name: Some("Faker".to_string()),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::MissingQueryParams)));

        let result = get_summoner(
            State(state),
            Query(SummonerQuery {
                region: Some("kr".to_string()),
                name: Some(String::new()),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::MissingQueryParams)));
    }

    #[tokio::test]
    async fn test_get_summoner_rejects_unknown_region() {
        let state = offline_state(true);
        let result = get_summoner(
            State(state),
            Query(SummonerQuery {
                region: Some("mars".to_string()),
                name: Some("Faker".to_string()),
            }),
        )
        .await;
        match result {
            Err(ApiError::UnsupportedRegion(region)) => assert_eq!(region, "mars"),
            other => panic!("expected UnsupportedRegion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_summoner_without_api_key_returns_demo_fallback() {
        let state = offline_state(false);
        let response = get_summoner(
            State(state),
            Query(SummonerQuery {
                region: Some("na1".to_string()),
                name: Some("Faker".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.meta.source, "fallback");
        assert_eq!(response.0.meta.reason.as_deref(), Some(NO_KEY_REASON));
        assert_eq!(response.0.payload.profile.name, "SummonerName");
    }

    #[tokio::test]
    async fn test_get_summoner_serves_cached_response() {
        let state = offline_state(true);
        let payload = demo_payload();
        state
            .service
            .store_response(Platform::Na1, "SummonerName", &payload)
            .await;

        let response = get_summoner(
            State(state),
            Query(SummonerQuery {
                region: Some("NA1".to_string()),
                name: Some("  summonername  ".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.meta.source, "cache");
        assert!(response.0.meta.cached_at.is_some());
        assert_eq!(response.0.payload.profile.name, payload.profile.name);
    }

    #[tokio::test]
    async fn test_set_banner_requires_all_fields() {
        let state = offline_state(true);
        let result = set_banner(
            State(state),
            Json(BannerRequest {
                region: Some("na1".to_string()),
                name: Some("Faker".to_string()),
                banner_clip: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::MissingBannerFields)));
    }

    #[tokio::test]
    async fn test_set_banner_rejects_non_http_clip() {
        let state = offline_state(true);
        let result = set_banner(
            State(state),
            Json(BannerRequest {
                region: Some("na1".to_string()),
                name: Some("Faker".to_string()),
                banner_clip: Some("file:///etc/passwd".to_string()),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::InvalidBannerUrl)));
    }

    #[tokio::test]
    async fn test_set_banner_rejects_unknown_region() {
        let state = offline_state(true);
        let result = set_banner(
            State(state),
            Json(BannerRequest {
                region: Some("moon".to_string()),
                name: Some("Faker".to_string()),
                banner_clip: Some("https://cdn.example.com/clip.mp4".to_string()),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::UnsupportedRegion(_))));
    }

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let response = health().await;
        assert_eq!(response.0.status, "healthy");
        assert!(response.0.timestamp.ends_with('Z'));
    }
}
