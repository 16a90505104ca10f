//! View models served by the summoner endpoints
//!
//! These types define the JSON contract with the front-end: a profile
//! card, recent matches grouped by queue, and champion summaries, plus
//! the meta envelope describing where a response came from.

pub mod demo;
pub mod enrich;

pub use demo::demo_payload;
pub use enrich::enrich;

use serde::{Deserialize, Serialize};

/// Resolved summoner identity, the product of the account and summoner
/// lookups. This is what the summoner cache stores.
#[derive(Debug, Clone)]
pub struct SummonerProfile {
    /// Canonical display name, "GameName#TAG" when the account has one
    pub name: String,
    /// Globally unique player identifier
    pub puuid: String,
    /// Encrypted summoner id for league lookups
    pub summoner_id: String,
    /// Summoner level
    pub level: u32,
}

/// Queues the match history view distinguishes. Everything else is
/// dropped from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    RankedSolo,
    RankedFlex,
    Aram,
}

impl QueueKind {
    /// Maps a Riot queue id to a tracked queue, `None` for the rest.
    pub fn from_queue_id(queue_id: u16) -> Option<QueueKind> {
        match queue_id {
            420 => Some(QueueKind::RankedSolo),
            440 => Some(QueueKind::RankedFlex),
            450 => Some(QueueKind::Aram),
            _ => None,
        }
    }

    /// Human-readable queue name shown on match rows.
    pub fn label(&self) -> &'static str {
        match self {
            QueueKind::RankedSolo => "Ranked Solo",
            QueueKind::RankedFlex => "Ranked Flex",
            QueueKind::Aram => "ARAM",
        }
    }
}

/// Full response payload for one summoner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummonerPayload {
    pub profile: ProfileView,
    pub matches: MatchesByQueue,
    pub champions: Vec<ChampionSummary>,
}

/// Profile card data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    /// Lowercase platform routing value, e.g. "na1"
    pub region: String,
    pub region_display: String,
    pub level: u32,
    /// URL of the highlight clip shown behind the profile, may be empty
    pub banner_clip: String,
    pub meta_line: String,
    pub headline: String,
    pub rank_label: String,
    /// Up to three most-played roles
    pub roles: Vec<String>,
    /// Up to three headline achievements from recent ranked games
    pub highlights: Vec<String>,
    pub stats: ProfileStats,
}

/// The four stat tiles on the profile card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(rename = "seasonWins")]
    pub season_wins: StatBlock,
    #[serde(rename = "averageKDA")]
    pub average_kda: StatBlock,
    #[serde(rename = "damageShare")]
    pub damage_share: StatBlock,
    #[serde(rename = "visionScore")]
    pub vision_score: StatBlock,
}

/// One stat tile: a headline value plus a qualifier line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatBlock {
    pub value: String,
    pub subtext: String,
}

/// Recent matches grouped by queue, newest first within each group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchesByQueue {
    #[serde(rename = "RANKED_SOLO")]
    pub ranked_solo: Vec<MatchRow>,
    #[serde(rename = "RANKED_FLEX")]
    pub ranked_flex: Vec<MatchRow>,
    #[serde(rename = "ARAM")]
    pub aram: Vec<MatchRow>,
}

impl MatchesByQueue {
    /// Returns the row list for a queue.
    pub fn rows_mut(&mut self, queue: QueueKind) -> &mut Vec<MatchRow> {
        match queue {
            QueueKind::RankedSolo => &mut self.ranked_solo,
            QueueKind::RankedFlex => &mut self.ranked_flex,
            QueueKind::Aram => &mut self.aram,
        }
    }
}

/// One row in the match history table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRow {
    pub champion: String,
    pub role: String,
    /// "kills / deaths / assists"
    pub kda: String,
    /// Numeric KDA used for sorting highlights, rounded to 2 decimals
    pub kda_value: f64,
    /// "win" or "loss"
    pub result: String,
    /// Game length, e.g. "32m"
    pub duration: String,
    /// Creep score, e.g. "264 CS"
    pub cs: String,
    /// Kill participation, e.g. "72% KP"
    pub kp: String,
    pub time_ago: String,
    pub queue_label: String,
}

/// Aggregated record for one champion across recent matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionSummary {
    pub name: String,
    /// Role from the champion's first appearance in the sample
    pub role: String,
    /// Integer percentage, e.g. "56%"
    pub win_rate: String,
    /// Per-game averages, e.g. "6.1 / 3.2 / 7.8"
    pub kda: String,
    pub games: u32,
}

/// Envelope describing where a response's data came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// "riot", "cache" or "fallback"
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieved_at: Option<String>,
}

impl ResponseMeta {
    /// Data was fetched from Riot during this request.
    pub fn riot(retrieved_at: String) -> Self {
        Self {
            source: "riot".to_string(),
            reason: None,
            cached_at: None,
            retrieved_at: Some(retrieved_at),
        }
    }

    /// Data was served from the response cache.
    pub fn cache(cached_at: String) -> Self {
        Self {
            source: "cache".to_string(),
            reason: None,
            cached_at: Some(cached_at),
            retrieved_at: None,
        }
    }

    /// Demo data was served instead of live data.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            source: "fallback".to_string(),
            reason: Some(reason.into()),
            cached_at: None,
            retrieved_at: None,
        }
    }
}

/// A summoner payload together with its meta envelope, as sent over
/// the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummonerResponse {
    pub meta: ResponseMeta,
    #[serde(flatten)]
    pub payload: SummonerPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_kind_mapping() {
        assert_eq!(QueueKind::from_queue_id(420), Some(QueueKind::RankedSolo));
        assert_eq!(QueueKind::from_queue_id(440), Some(QueueKind::RankedFlex));
        assert_eq!(QueueKind::from_queue_id(450), Some(QueueKind::Aram));

        // Untracked queues: draft pick, clash, arena
        assert_eq!(QueueKind::from_queue_id(400), None);
        assert_eq!(QueueKind::from_queue_id(700), None);
        assert_eq!(QueueKind::from_queue_id(1700), None);
    }

    #[test]
    fn test_queue_kind_labels() {
        assert_eq!(QueueKind::RankedSolo.label(), "Ranked Solo");
        assert_eq!(QueueKind::RankedFlex.label(), "Ranked Flex");
        assert_eq!(QueueKind::Aram.label(), "ARAM");
    }

    #[test]
    fn test_rows_mut_selects_queue_group() {
        let mut matches = MatchesByQueue::default();
        matches.rows_mut(QueueKind::Aram).push(MatchRow {
            champion: "Ziggs".to_string(),
            role: "Mage".to_string(),
            kda: "14 / 4 / 24".to_string(),
            kda_value: 9.5,
            result: "win".to_string(),
            duration: "20m".to_string(),
            cs: "84 CS".to_string(),
            kp: "78% KP".to_string(),
            time_ago: "2 days ago".to_string(),
            queue_label: "ARAM".to_string(),
        });

        assert!(matches.ranked_solo.is_empty());
        assert!(matches.ranked_flex.is_empty());
        assert_eq!(matches.aram.len(), 1);
    }

    #[test]
    fn test_payload_serializes_with_wire_field_names() {
        let payload = demo_payload();
        let json = serde_json::to_value(&payload).expect("Failed to serialize payload");

        let profile = &json["profile"];
        assert!(profile.get("regionDisplay").is_some());
        assert!(profile.get("bannerClip").is_some());
        assert!(profile.get("metaLine").is_some());
        assert!(profile.get("rankLabel").is_some());

        let stats = &profile["stats"];
        assert!(stats.get("seasonWins").is_some());
        assert!(stats.get("averageKDA").is_some());
        assert!(stats.get("damageShare").is_some());
        assert!(stats.get("visionScore").is_some());

        let matches = &json["matches"];
        assert!(matches.get("RANKED_SOLO").is_some());
        assert!(matches.get("RANKED_FLEX").is_some());
        assert!(matches.get("ARAM").is_some());

        let row = &matches["RANKED_SOLO"][0];
        assert!(row.get("kdaValue").is_some());
        assert!(row.get("timeAgo").is_some());
        assert!(row.get("queueLabel").is_some());

        assert!(json["champions"][0].get("winRate").is_some());
    }

    #[test]
    fn test_meta_envelope_flattens_next_to_payload() {
        let response = SummonerResponse {
            meta: ResponseMeta::cache("2026-07-01T10:00:00.000Z".to_string()),
            payload: demo_payload(),
        };
        let json = serde_json::to_value(&response).expect("Failed to serialize response");

        assert_eq!(json["meta"]["source"], "cache");
        assert_eq!(json["meta"]["cachedAt"], "2026-07-01T10:00:00.000Z");
        // Unset meta fields stay out of the JSON entirely
        assert!(json["meta"].get("reason").is_none());
        assert!(json["meta"].get("retrievedAt").is_none());
        // Payload fields sit at the top level, not under a "payload" key
        assert!(json.get("payload").is_none());
        assert!(json.get("profile").is_some());
        assert!(json.get("matches").is_some());
        assert!(json.get("champions").is_some());
    }

    #[test]
    fn test_meta_constructors() {
        let riot = ResponseMeta::riot("2026-07-01T10:00:00.000Z".to_string());
        assert_eq!(riot.source, "riot");
        assert!(riot.reason.is_none());
        assert!(riot.cached_at.is_none());
        assert_eq!(riot.retrieved_at.as_deref(), Some("2026-07-01T10:00:00.000Z"));

        let fallback = ResponseMeta::fallback("Riot API key not configured.");
        assert_eq!(fallback.source, "fallback");
        assert_eq!(fallback.reason.as_deref(), Some("Riot API key not configured."));
    }
}
