//! Command-line interface parsing for Yordlepedia
//!
//! This module handles parsing of CLI arguments using clap. Flags override
//! the corresponding environment settings, which keeps one-off runs (another
//! port, a different front-end build) from requiring env edits.

use clap::Parser;

use crate::config::AppConfig;

/// Yordlepedia - League of Legends summoner statistics server
#[derive(Parser, Debug)]
#[command(name = "yordlepedia")]
#[command(about = "Summoner statistics server backed by the Riot Games API")]
#[command(version)]
pub struct Cli {
    /// Interface to bind, overriding $HOST
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,

    /// Port to listen on, overriding $PORT
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Directory of static front-end files, overriding $STATIC_DIR
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<String>,

    /// Skip warming caches for $PREFETCH_SUMMONERS at startup
    #[arg(long)]
    pub no_prefetch: bool,
}

impl Cli {
    /// Folds parsed flags into the environment-derived configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if self.no_prefetch {
            config.prefetch_targets.clear();
        }
    }
}
