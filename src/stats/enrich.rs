//! Summoner statistics aggregation
//!
//! Turns raw Riot data (league entries plus recent match details) into
//! the view models the front-end renders: match rows grouped by queue,
//! champion summaries, role distribution, stat tiles and highlights.

use chrono::{DateTime, Utc};

use crate::riot::{LeagueEntryDto, MatchDto, Platform};

use super::{
    ChampionSummary, MatchRow, MatchesByQueue, ProfileStats, ProfileView, QueueKind, StatBlock,
    SummonerPayload, SummonerProfile,
};

/// Queue id of ranked solo in League-V4 entries
const RANKED_SOLO_QUEUE_TYPE: &str = "RANKED_SOLO_5x5";

/// Per-champion accumulator while walking the match sample
struct ChampionTally {
    name: String,
    role: String,
    games: u32,
    wins: u32,
    kills: u32,
    deaths: u32,
    assists: u32,
}

/// Build the full summoner payload from raw Riot data.
///
/// Matches in untracked queues are dropped, as are matches where the
/// summoner does not appear among the participants. `now` anchors the
/// relative timestamps so callers and tests agree on the clock.
pub fn enrich(
    profile: &SummonerProfile,
    platform: Platform,
    ranked: &[LeagueEntryDto],
    matches: &[MatchDto],
    now: DateTime<Utc>,
) -> SummonerPayload {
    let ranked_solo = ranked
        .iter()
        .find(|entry| entry.queue_type == RANKED_SOLO_QUEUE_TYPE);

    let rank_label = match ranked_solo {
        Some(entry) => format!("Ranked Solo · {} {}", title_case(&entry.tier), entry.rank),
        None => "Ranked Solo · Unranked".to_string(),
    };
    let headline = match ranked_solo {
        Some(entry) => format!(
            "{} {} · {}% Winrate",
            title_case(&entry.tier),
            entry.rank,
            win_rate(entry.wins, entry.losses)
        ),
        None => "Unranked · Play placements to unlock rank data".to_string(),
    };

    let mut matches_by_queue = MatchesByQueue::default();

    let mut total_kills: u32 = 0;
    let mut total_deaths: u32 = 0;
    let mut total_assists: u32 = 0;
    let mut total_vision: u32 = 0;
    let mut damage_shares: Vec<f64> = Vec::new();
    // Vec accumulators keep first-seen order so ties sort stably below
    let mut role_counts: Vec<(&'static str, u32)> = Vec::new();
    let mut champions: Vec<ChampionTally> = Vec::new();
    let mut total_games: u32 = 0;
    let mut total_wins: u32 = 0;

    for detail in matches {
        let info = &detail.info;
        let Some(queue) = QueueKind::from_queue_id(info.queue_id) else {
            continue;
        };
        let Some(participant) = info
            .participants
            .iter()
            .find(|p| p.puuid == profile.puuid)
        else {
            continue;
        };

        let role_label = resolve_role(&participant.team_position, &participant.role);

        let team_kills: u32 = info
            .participants
            .iter()
            .filter(|p| p.team_id == participant.team_id)
            .map(|p| p.kills)
            .sum::<u32>()
            .max(1);
        let team_damage: u64 = info
            .participants
            .iter()
            .filter(|p| p.team_id == participant.team_id)
            .map(|p| u64::from(p.total_damage_dealt_to_champions))
            .sum::<u64>()
            .max(1);

        let kills = participant.kills;
        let deaths = participant.deaths;
        let assists = participant.assists;
        let cs = participant.total_minions_killed + participant.neutral_minions_killed;
        let kda_value = f64::from(kills + assists) / f64::from(deaths.max(1));
        let kp_value =
            (f64::from(kills + assists) / f64::from(team_kills) * 100.0).round() as u32;
        let damage_share =
            f64::from(participant.total_damage_dealt_to_champions) / team_damage as f64;
        let duration_minutes = (info.game_duration as f64 / 60.0).round() as i64;
        let game_timestamp = info
            .game_end_timestamp
            .filter(|&ts| ts != 0)
            .or(info.game_creation)
            .filter(|&ts| ts != 0);

        total_kills += kills;
        total_deaths += deaths;
        total_assists += assists;
        total_vision += participant.vision_score;
        damage_shares.push(damage_share);
        total_games += 1;
        if participant.win {
            total_wins += 1;
        }

        match role_counts.iter_mut().find(|(label, _)| *label == role_label) {
            Some((_, count)) => *count += 1,
            None => role_counts.push((role_label, 1)),
        }

        let tally_index = match champions
            .iter()
            .position(|tally| tally.name == participant.champion_name)
        {
            Some(index) => index,
            None => {
                champions.push(ChampionTally {
                    name: participant.champion_name.clone(),
                    role: role_label.to_string(),
                    games: 0,
                    wins: 0,
                    kills: 0,
                    deaths: 0,
                    assists: 0,
                });
                champions.len() - 1
            }
        };
        let tally = &mut champions[tally_index];
        tally.games += 1;
        if participant.win {
            tally.wins += 1;
        }
        tally.kills += kills;
        tally.deaths += deaths;
        tally.assists += assists;

        matches_by_queue.rows_mut(queue).push(MatchRow {
            champion: participant.champion_name.clone(),
            role: role_label.to_string(),
            kda: format!("{kills} / {deaths} / {assists}"),
            kda_value: round2(kda_value),
            result: if participant.win { "win" } else { "loss" }.to_string(),
            duration: format!("{duration_minutes}m"),
            cs: format!("{cs} CS"),
            kp: format!("{kp_value}% KP"),
            time_ago: time_ago(game_timestamp, now),
            queue_label: queue.label().to_string(),
        });
    }

    role_counts.sort_by(|a, b| b.1.cmp(&a.1));
    let mut roles: Vec<String> = role_counts
        .into_iter()
        .take(3)
        .map(|(label, _)| label.to_string())
        .collect();
    if roles.is_empty() {
        roles.push("Fill".to_string());
    }

    champions.sort_by(|a, b| b.games.cmp(&a.games));
    let champion_summaries: Vec<ChampionSummary> = champions
        .iter()
        .take(4)
        .map(|tally| {
            let games = f64::from(tally.games);
            ChampionSummary {
                name: tally.name.clone(),
                role: tally.role.clone(),
                win_rate: format!("{}%", win_rate(tally.wins, tally.games - tally.wins)),
                kda: format!(
                    "{:.1} / {:.1} / {:.1}",
                    round1(f64::from(tally.kills) / games),
                    round1(f64::from(tally.deaths) / games),
                    round1(f64::from(tally.assists) / games)
                ),
                games: tally.games,
            }
        })
        .collect();

    let average_kda = if total_games > 0 {
        let value = f64::from(total_kills + total_assists) / f64::from(total_deaths.max(1));
        format!("{:.2}", round2(value))
    } else {
        "0.00".to_string()
    };

    let average_damage_share = if damage_shares.is_empty() {
        "—".to_string()
    } else {
        let mean = damage_shares.iter().sum::<f64>() / damage_shares.len() as f64;
        format!("{}%", (mean * 100.0).round() as i64)
    };

    let average_vision = if total_games > 0 {
        ((f64::from(total_vision) / f64::from(total_games)).round() as u32).to_string()
    } else {
        "—".to_string()
    };

    // Highlights come from ranked games only, best KDA first
    let mut highlighted: Vec<&MatchRow> = matches_by_queue
        .ranked_solo
        .iter()
        .chain(matches_by_queue.ranked_flex.iter())
        .collect();
    highlighted.sort_by(|a, b| {
        b.kda_value
            .partial_cmp(&a.kda_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut highlights: Vec<String> = Vec::new();
    if let Some(best) = highlighted.first() {
        highlights.push(format!("{} {} carry", best.kda, best.champion));
    }
    if let Some(second) = highlighted.get(1) {
        highlights.push(format!("{} on {}", second.cs, second.champion));
    }
    if total_games > 0 {
        highlights.push(format!("{total_wins} wins in last {total_games} games"));
    }
    highlights.truncate(3);
    if highlights.is_empty() {
        highlights.push("Play more ranked games to unlock highlights".to_string());
    }

    let (ranked_wins, ranked_losses) = ranked_solo
        .map(|entry| (entry.wins, entry.losses))
        .unwrap_or((0, 0));

    let stats = ProfileStats {
        season_wins: StatBlock {
            value: ranked_wins.to_string(),
            subtext: match ranked_solo {
                Some(_) => format!("{ranked_losses} ranked losses"),
                None => "Unranked".to_string(),
            },
        },
        average_kda: StatBlock {
            value: average_kda,
            subtext: format!("{total_games} recent matches"),
        },
        damage_share: StatBlock {
            value: average_damage_share,
            subtext: "Average team damage share".to_string(),
        },
        vision_score: StatBlock {
            value: average_vision,
            subtext: "Vision score per game".to_string(),
        },
    };

    SummonerPayload {
        profile: ProfileView {
            name: profile.name.clone(),
            region: platform.as_str().to_string(),
            region_display: platform.display().to_string(),
            level: profile.level,
            banner_clip: String::new(),
            meta_line: format!("{} · Level {}", platform.display(), profile.level),
            headline,
            rank_label,
            roles,
            highlights,
            stats,
        },
        matches: matches_by_queue,
        champions: champion_summaries,
    }
}

/// Integer win percentage, 0 when no games were played.
pub fn win_rate(wins: u32, losses: u32) -> u32 {
    let total = wins + losses;
    if total == 0 {
        return 0;
    }
    (f64::from(wins) / f64::from(total) * 100.0).round() as u32
}

/// Lowercases a value and capitalizes the start of each word, turning
/// Riot's "GOLD" into "Gold".
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut prev_is_word = false;
    for ch in value.to_lowercase().chars() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        prev_is_word = is_word;
    }
    result
}

/// Renders an epoch-millisecond timestamp as a coarse relative time.
pub fn time_ago(timestamp: Option<i64>, now: DateTime<Utc>) -> String {
    let Some(timestamp) = timestamp else {
        return "Recently".to_string();
    };
    let delta = (now.timestamp_millis() - timestamp).max(0);
    let minutes = delta / 60_000;
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format_ago(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format_ago(hours, "hour");
    }
    let days = hours / 24;
    if days < 30 {
        return format_ago(days, "day");
    }
    let months = days / 30;
    if months < 12 {
        return format_ago(months, "month");
    }
    format_ago(months / 12, "year")
}

fn format_ago(count: i64, unit: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{suffix} ago")
}

/// Maps Riot position strings onto the five display roles.
///
/// `team_position` wins unless it is empty or "UTILITY", in which case
/// the legacy `role` field breaks the tie. Anything unrecognized lands
/// on "Fill".
pub fn resolve_role(team_position: &str, fallback_role: &str) -> &'static str {
    let role = if !team_position.is_empty() && team_position != "UTILITY" {
        team_position
    } else {
        fallback_role
    };
    match role {
        "MIDDLE" | "MID" => "Mid",
        "TOP" => "Top",
        "JUNGLE" => "Jungle",
        "BOTTOM" | "ADC" => "ADC",
        "UTILITY" | "SUPPORT" => "Support",
        _ => "Fill",
    }
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place, half away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
