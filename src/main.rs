//! Yordlepedia - League of Legends summoner statistics server
//!
//! An HTTP service that aggregates Riot Games API data (account, summoner,
//! ranked entries, match history) into ready-to-render profile statistics,
//! with an in-memory TTL cache in front of every upstream endpoint.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use yordlepedia::cli::Cli;
use yordlepedia::config::AppConfig;
use yordlepedia::riot::RiotClient;
use yordlepedia::server::{self, AppState};
use yordlepedia::service::SummonerService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    cli.apply(&mut config);

    if !config.has_api_key() {
        info!("RIOT_API_KEY not set, all lookups will serve the demo snapshot");
    }

    let riot = RiotClient::new(config.riot_api_key.clone());
    let service = SummonerService::new(
        riot,
        config.match_history_count,
        config.match_detail_concurrency,
    );
    let state = Arc::new(AppState::new(service, config.has_api_key()));

    // Warm configured summoners in the background once the server is up.
    if config.has_api_key() && !config.prefetch_targets.is_empty() {
        let targets = config.prefetch_targets.clone();
        let prefetch_state = Arc::clone(&state);
        tokio::spawn(async move {
            prefetch_state.service.prefetch(&targets).await;
        });
    }

    server::run_server(&config, state).await?;

    Ok(())
}
