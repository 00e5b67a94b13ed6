//! Headline cards and badges.

use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

use super::stats::{group_fold, Mean};
use crate::domain::{PlayerGameRecord, Season, TeamGameRecord};

/// Shown on cards and badges when the filtered data has nothing to report
pub const NOT_AVAILABLE: &str = "N/A";

/// Season-range label used when no season survives the filters
pub const ALL_SEASONS: &str = "All Seasons";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonRange {
    pub first: Season,
    pub last: Season,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub season_range: Option<SeasonRange>,
    pub seasons_label: String,
    pub total_games: usize,
    pub total_players: usize,
    pub avg_points: f64,
    /// Percentage in [0, 100]
    pub home_win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badges {
    pub most_successful_team: String,
    pub most_impactful_player: String,
}

impl Badges {
    pub fn has_fallback(&self) -> bool {
        self.most_successful_team == NOT_AVAILABLE || self.most_impactful_player == NOT_AVAILABLE
    }
}

pub fn summarize(teams: &[&TeamGameRecord], players: &[&PlayerGameRecord]) -> KpiSummary {
    let season_range = season_range(teams);
    let seasons_label = match season_range {
        Some(range) => format!("{} – {}", range.first, range.last),
        None => ALL_SEASONS.to_string(),
    };

    let mut points = Mean::default();
    let mut home_wins = Mean::default();
    for row in teams {
        points.push(row.points);
        if row.venue.is_home() {
            home_wins.push(row.win_value());
        }
    }

    let total_players = players
        .iter()
        .map(|r| r.player.as_str())
        .collect::<HashSet<_>>()
        .len();

    KpiSummary {
        season_range,
        seasons_label,
        total_games: count_games(teams),
        total_players,
        avg_points: points.value_or_zero(),
        home_win_rate: home_wins.value_or_zero() * 100.0,
    }
}

fn season_range(teams: &[&TeamGameRecord]) -> Option<SeasonRange> {
    let first = teams.iter().map(|r| r.season).min()?;
    let last = teams.iter().map(|r| r.season).max()?;
    Some(SeasonRange { first, last })
}

/// Distinct non-blank game identifiers
///
/// Rows without an identifier are skipped. When no row carries one the
/// count falls back to the number of rows.
pub fn count_games(teams: &[&TeamGameRecord]) -> usize {
    let ids: HashSet<&str> = teams.iter().filter_map(|r| r.game_id.as_deref()).collect();
    if ids.is_empty() {
        teams.len()
    } else {
        ids.len()
    }
}

pub fn badges(teams: &[&TeamGameRecord], players: &[&PlayerGameRecord]) -> Badges {
    let most_successful_team = top_team(teams).unwrap_or_else(|| {
        warn!("No team rows after filtering, most successful team badge falls back to {NOT_AVAILABLE}");
        NOT_AVAILABLE.to_string()
    });
    let most_impactful_player = top_player(players).unwrap_or_else(|| {
        warn!("No player rows after filtering, most impactful player badge falls back to {NOT_AVAILABLE}");
        NOT_AVAILABLE.to_string()
    });

    Badges {
        most_successful_team,
        most_impactful_player,
    }
}

/// Team with the highest mean win rate; earliest group wins ties
fn top_team(teams: &[&TeamGameRecord]) -> Option<String> {
    let groups = group_fold(
        teams.iter().copied(),
        |r| r.team.as_str(),
        |acc: &mut Mean, r| acc.push(r.win_value()),
    );
    arg_max(groups).map(str::to_string)
}

/// Player with the highest mean efficiency score over every game they played
fn top_player(players: &[&PlayerGameRecord]) -> Option<String> {
    let groups = group_fold(
        players.iter().copied(),
        |r| r.player.as_str(),
        |acc: &mut Mean, r| acc.push(r.efficiency),
    );
    arg_max(groups).map(str::to_string)
}

fn arg_max<K>(groups: Vec<(K, Mean)>) -> Option<K> {
    let mut best: Option<(K, f64)> = None;
    for (key, mean) in groups {
        let Some(value) = mean.value().filter(|v| v.is_finite()) else {
            continue;
        };
        if best.as_ref().map_or(true, |(_, top)| value > *top) {
            best = Some((key, value));
        }
    }
    best.map(|(key, _)| key)
}
