//! Wire types for the Riot API endpoints we consume
//!
//! Field names follow Riot's camelCase JSON. Only the fields the
//! aggregation pipeline reads are modelled; serde skips the rest.

use serde::Deserialize;

/// Account-V1 response for a Riot ID lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    /// Globally unique player identifier
    pub puuid: String,
    /// Current game name, absent for some legacy accounts
    #[serde(default)]
    pub game_name: Option<String>,
    /// Current tag line, absent for some legacy accounts
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// Summoner-V4 response for a PUUID lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner id, used for league entry lookups
    pub id: String,
    /// Globally unique player identifier
    pub puuid: String,
    /// Summoner level
    pub summoner_level: u32,
}

/// League-V4 entry for one ranked queue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    /// Queue identifier, e.g. "RANKED_SOLO_5x5"
    pub queue_type: String,
    /// Tier in uppercase, e.g. "GOLD"
    pub tier: String,
    /// Division within the tier, e.g. "II"
    pub rank: String,
    /// Ranked wins this season
    #[serde(default)]
    pub wins: u32,
    /// Ranked losses this season
    #[serde(default)]
    pub losses: u32,
}

/// Match-V5 match detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfoDto,
}

/// Game-level data within a match detail.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    /// Queue identifier, e.g. 420 for ranked solo
    pub queue_id: u16,
    /// Game length in seconds
    #[serde(default)]
    pub game_duration: i64,
    /// Game creation time in epoch milliseconds
    #[serde(default)]
    pub game_creation: Option<i64>,
    /// Game end time in epoch milliseconds, missing on older records
    #[serde(default)]
    pub game_end_timestamp: Option<i64>,
    pub participants: Vec<ParticipantDto>,
}

/// Per-player data within a match detail.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    /// Globally unique player identifier
    pub puuid: String,
    /// Champion played, e.g. "Ahri"
    pub champion_name: String,
    /// Team identifier, 100 or 200
    pub team_id: u16,
    /// Assigned lane, e.g. "MIDDLE", may be empty
    #[serde(default)]
    pub team_position: String,
    /// Legacy role field used as a fallback for lane resolution
    #[serde(default)]
    pub role: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(default)]
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: u32,
    #[serde(default)]
    pub vision_score: u32,
    pub win: bool,
}
