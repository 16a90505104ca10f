//! API error responses
//!
//! Every error leaving the HTTP layer serializes to `{"error": "<message>"}`
//! with an appropriate status code, so the front-end can surface the message
//! verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::riot::RiotError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The summoner lookup was called without its required query parameters.
    #[error("Query parameters 'region' and 'name' are required.")]
    MissingQueryParams,

    /// The region string does not name a known platform.
    #[error("Unsupported region \"{0}\".")]
    UnsupportedRegion(String),

    /// Riot has no summoner under the requested name on that platform.
    #[error("Summoner \"{name}\" not found on {region}.")]
    SummonerNotFound { name: String, region: String },

    /// The banner request body was missing one of its fields.
    #[error("Missing required fields: region, name, bannerClip")]
    MissingBannerFields,

    /// The banner clip value did not parse as an http(s) URL.
    #[error("bannerClip must be a valid http(s) URL.")]
    InvalidBannerUrl,

    /// The banner target summoner does not exist.
    #[error("Summoner not found.")]
    BannerSummonerNotFound,

    /// Something other than a missing summoner broke the banner update.
    #[error("Failed to set banner.")]
    SetBannerFailed(#[source] RiotError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQueryParams
            | ApiError::UnsupportedRegion(_)
            | ApiError::MissingBannerFields
            | ApiError::InvalidBannerUrl => StatusCode::BAD_REQUEST,
            ApiError::SummonerNotFound { .. } | ApiError::BannerSummonerNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::SetBannerFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::SetBannerFailed(source) = &self {
            error!("Set banner error: {source}");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
