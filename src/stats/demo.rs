//! Canned demo payload
//!
//! Served when no Riot API key is configured or a live lookup fails,
//! so the front-end always has something to render.

use super::{
    ChampionSummary, MatchRow, MatchesByQueue, ProfileStats, ProfileView, StatBlock,
    SummonerPayload,
};

/// Returns the demo snapshot shown in place of live data.
pub fn demo_payload() -> SummonerPayload {
    SummonerPayload {
        profile: ProfileView {
            name: "SummonerName".to_string(),
            region: "na1".to_string(),
            region_display: "NA".to_string(),
            level: 218,
            banner_clip:
                "https://interactive-examples.mdn.mozilla.org/media/cc0-videos/flower.mp4"
                    .to_string(),
            meta_line: "NA · Level 218 · Top 3.2%".to_string(),
            headline: "Gold II · 52.3% Winrate".to_string(),
            rank_label: "Ranked Solo · Gold II".to_string(),
            roles: vec![
                "Mid".to_string(),
                "Jungle".to_string(),
                "Fill".to_string(),
            ],
            highlights: vec![
                "15.4 KDA Syndra carry".to_string(),
                "18 assists on Thresh".to_string(),
                "Samira Pentakill last session".to_string(),
            ],
            stats: ProfileStats {
                season_wins: stat("214", "+12 in the last week"),
                average_kda: stat("3.68", "Across 5 recent ranked games"),
                damage_share: stat("29%", "+8% vs role average"),
                vision_score: stat("32", "Average per game"),
            },
        },
        matches: MatchesByQueue {
            ranked_solo: vec![
                row("Ahri", "Mid", "12 / 3 / 9", 7.0, "win", "32m", "264 CS", "72% KP", "2 hours ago", "Ranked Solo"),
                row("Lee Sin", "Jungle", "6 / 5 / 14", 4.0, "win", "28m", "194 CS", "68% KP", "5 hours ago", "Ranked Solo"),
                row("Syndra", "Mid", "3 / 7 / 4", 1.0, "loss", "25m", "182 CS", "46% KP", "8 hours ago", "Ranked Solo"),
                row("Samira", "ADC", "18 / 2 / 8", 13.0, "win", "38m", "302 CS", "64% KP", "1 day ago", "Ranked Solo"),
                row("Thresh", "Support", "2 / 1 / 23", 25.0, "win", "30m", "24 CS", "85% KP", "1 day ago", "Ranked Solo"),
            ],
            ranked_flex: vec![
                row("Lux", "Support", "5 / 2 / 18", 11.5, "win", "27m", "34 CS", "82% KP", "3 days ago", "Ranked Flex"),
                row("Ezreal", "ADC", "7 / 6 / 5", 2.0, "loss", "31m", "288 CS", "59% KP", "4 days ago", "Ranked Flex"),
            ],
            aram: vec![
                row("Ziggs", "Mage", "14 / 4 / 24", 9.5, "win", "20m", "84 CS", "78% KP", "2 days ago", "ARAM"),
                row("Velkoz", "Mage", "10 / 9 / 19", 3.2, "loss", "22m", "68 CS", "65% KP", "2 days ago", "ARAM"),
            ],
        },
        champions: vec![
            champion("Ahri", "Mid", "56.2%", "6.1 / 3.2 / 7.8", 24),
            champion("Lee Sin", "Jungle", "53.4%", "4.8 / 4.6 / 8.9", 18),
            champion("Samira", "ADC", "58.6%", "8.9 / 5.1 / 5.6", 16),
            champion("Thresh", "Support", "54.7%", "2.2 / 4.1 / 14.8", 29),
        ],
    }
}

fn stat(value: &str, subtext: &str) -> StatBlock {
    StatBlock {
        value: value.to_string(),
        subtext: subtext.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    champion: &str,
    role: &str,
    kda: &str,
    kda_value: f64,
    result: &str,
    duration: &str,
    cs: &str,
    kp: &str,
    time_ago: &str,
    queue_label: &str,
) -> MatchRow {
    MatchRow {
        champion: champion.to_string(),
        role: role.to_string(),
        kda: kda.to_string(),
        kda_value,
        result: result.to_string(),
        duration: duration.to_string(),
        cs: cs.to_string(),
        kp: kp.to_string(),
        time_ago: time_ago.to_string(),
        queue_label: queue_label.to_string(),
    }
}

fn champion(name: &str, role: &str, win_rate: &str, kda: &str, games: u32) -> ChampionSummary {
    ChampionSummary {
        name: name.to_string(),
        role: role.to_string(),
        win_rate: win_rate.to_string(),
        kda: kda.to_string(),
        games,
    }
}
