//! Riot API integration
//!
//! This module contains the routing tables, wire types and HTTP client
//! used to pull account, summoner, league and match data from Riot.

pub mod client;
pub mod region;
pub mod types;

pub use client::{RiotClient, RiotError};
pub use region::{Cluster, Platform};
pub use types::{AccountDto, LeagueEntryDto, MatchDto, MatchInfoDto, ParticipantDto, SummonerDto};
