//! Runtime configuration
//!
//! Every setting comes from an environment variable with a sensible default,
//! so the server starts with nothing but `RIOT_API_KEY` set (and even that is
//! optional, it just locks the API into demo mode). Command-line flags can
//! override the network settings after the environment is read.

use tracing::warn;

use crate::service::PrefetchTarget;

/// Server and pipeline settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind, `HOST` (default `0.0.0.0`).
    pub host: String,
    /// Port to bind, `PORT` (default `3000`).
    pub port: u16,
    /// Riot developer key, `RIOT_API_KEY`. Empty means demo mode.
    pub riot_api_key: String,
    /// Matches pulled per lookup, `MATCH_HISTORY_COUNT` (default 10).
    pub match_history_count: u32,
    /// Parallel match-detail requests, `MATCH_DETAIL_CONCURRENCY` (default 4).
    pub match_detail_concurrency: usize,
    /// Summoners warmed at startup, `PREFETCH_SUMMONERS` as `region:name,...`.
    pub prefetch_targets: Vec<PrefetchTarget>,
    /// Directory served for non-API routes, `STATIC_DIR` (default `site`).
    pub static_dir: String,
}

impl AppConfig {
    /// Reads configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parsed_env("PORT", 3000),
            riot_api_key: std::env::var("RIOT_API_KEY").unwrap_or_default(),
            match_history_count: parsed_env("MATCH_HISTORY_COUNT", 10),
            match_detail_concurrency: parsed_env("MATCH_DETAIL_CONCURRENCY", 4usize).max(1),
            prefetch_targets: PrefetchTarget::parse_list(
                &std::env::var("PREFETCH_SUMMONERS").unwrap_or_default(),
            ),
            static_dir: env_or("STATIC_DIR", "site"),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.riot_api_key.is_empty()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring invalid {key} value {raw:?}");
                default
            }
        },
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_prefers_set_value() {
        std::env::set_var("YORDLEPEDIA_TEST_HOST", "127.0.0.1");
        assert_eq!(env_or("YORDLEPEDIA_TEST_HOST", "0.0.0.0"), "127.0.0.1");
        assert_eq!(env_or("YORDLEPEDIA_TEST_HOST_UNSET", "0.0.0.0"), "0.0.0.0");
    }

    #[test]
    fn test_env_or_treats_blank_as_unset() {
        std::env::set_var("YORDLEPEDIA_TEST_BLANK", "   ");
        assert_eq!(env_or("YORDLEPEDIA_TEST_BLANK", "site"), "site");
    }

    #[test]
    fn test_parsed_env_reads_numbers() {
        std::env::set_var("YORDLEPEDIA_TEST_PORT", "8080");
        assert_eq!(parsed_env("YORDLEPEDIA_TEST_PORT", 3000u16), 8080);
    }

    #[test]
    fn test_parsed_env_falls_back_on_garbage() {
        std::env::set_var("YORDLEPEDIA_TEST_COUNT", "ten");
        assert_eq!(parsed_env("YORDLEPEDIA_TEST_COUNT", 10u32), 10);
        assert_eq!(parsed_env("YORDLEPEDIA_TEST_COUNT_UNSET", 4usize), 4);
    }

    #[test]
    fn test_has_api_key() {
        let mut config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            riot_api_key: String::new(),
            match_history_count: 10,
            match_detail_concurrency: 4,
            prefetch_targets: Vec::new(),
            static_dir: "site".to_string(),
        };
        assert!(!config.has_api_key());
        config.riot_api_key = "RGAPI-test".to_string();
        assert!(config.has_api_key());
    }
}
