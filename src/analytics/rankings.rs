//! Top-N leaderboards for teams, team-seasons and players.
//!
//! Every ranking sorts descending on its metric with a stable sort, so equal
//! metrics keep the order in which their group first appeared in the rows.

use serde::Serialize;

use super::stats::{group_fold, rank_desc, Mean};
use crate::domain::{PlayerGameRecord, Season, TeamGameRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamWinRate {
    pub team: String,
    pub win_rate: f64,
    pub games: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSeasonWinRate {
    pub season: Season,
    pub team: String,
    /// "TeamName (Season)"
    pub label: String,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerImpact {
    pub player: String,
    pub avg_efficiency: f64,
    pub games: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighScorer {
    pub player: String,
    /// Share of the player's games at or above the scoring threshold
    pub rate: f64,
    pub games: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestGame {
    pub player: String,
    pub best_efficiency: f64,
    pub best_points: f64,
}

/// Teams with the highest mean win rate
pub fn most_successful_teams(teams: &[&TeamGameRecord], limit: usize) -> Vec<TeamWinRate> {
    let groups = group_fold(
        teams.iter().copied(),
        |r| r.team.as_str(),
        |acc: &mut Mean, r| acc.push(r.win_value()),
    );
    let rows = groups
        .into_iter()
        .filter_map(|(team, mean)| {
            mean.value().map(|win_rate| TeamWinRate {
                team: team.to_string(),
                win_rate,
                games: mean.count(),
            })
        })
        .collect();
    rank_desc(rows, |r| r.win_rate, limit)
}

/// (season, team) pairs with the highest mean win rate
pub fn dominant_seasons(teams: &[&TeamGameRecord], limit: usize) -> Vec<TeamSeasonWinRate> {
    let groups = group_fold(
        teams.iter().copied(),
        |r| (r.season, r.team.as_str()),
        |acc: &mut Mean, r| acc.push(r.win_value()),
    );
    let rows = groups
        .into_iter()
        .filter_map(|((season, team), mean)| {
            mean.value().map(|win_rate| TeamSeasonWinRate {
                season,
                team: team.to_string(),
                label: format!("{team} ({season})"),
                win_rate,
            })
        })
        .collect();
    rank_desc(rows, |r| r.win_rate, limit)
}

/// Players with the highest mean efficiency among those with `min_games` or more
pub fn most_impactful_players(
    players: &[&PlayerGameRecord],
    min_games: usize,
    limit: usize,
) -> Vec<PlayerImpact> {
    let groups = group_fold(
        players.iter().copied(),
        |r| r.player.as_str(),
        |acc: &mut Mean, r| acc.push(r.efficiency),
    );
    let rows = groups
        .into_iter()
        .filter(|(_, mean)| mean.count() >= min_games)
        .filter_map(|(player, mean)| {
            mean.value().map(|avg_efficiency| PlayerImpact {
                player: player.to_string(),
                avg_efficiency,
                games: mean.count(),
            })
        })
        .collect();
    rank_desc(rows, |r| r.avg_efficiency, limit)
}

/// Players with the highest share of games scoring at least `threshold` points
pub fn high_scorers(players: &[&PlayerGameRecord], threshold: f64, limit: usize) -> Vec<HighScorer> {
    let groups = group_fold(
        players.iter().copied(),
        |r| r.player.as_str(),
        |acc: &mut Mean, r| acc.push(if r.points >= threshold { 1.0 } else { 0.0 }),
    );
    let rows = groups
        .into_iter()
        .filter_map(|(player, mean)| {
            mean.value().map(|rate| HighScorer {
                player: player.to_string(),
                rate,
                games: mean.count(),
            })
        })
        .collect();
    rank_desc(rows, |r| r.rate, limit)
}

#[derive(Debug, Default)]
struct Peak {
    efficiency: Option<f64>,
    points: Option<f64>,
}

impl Peak {
    fn push(&mut self, row: &PlayerGameRecord) {
        self.efficiency = peak(self.efficiency, row.efficiency);
        self.points = peak(self.points, row.points);
    }
}

/// Running maximum that skips non-finite values
fn peak(current: Option<f64>, value: f64) -> Option<f64> {
    if !value.is_finite() {
        return current;
    }
    Some(current.map_or(value, |c| c.max(value)))
}

/// Each player's best single game, ranked by peak efficiency
///
/// Peak efficiency and peak points are taken independently, so they may come
/// from different games.
pub fn top_single_games(players: &[&PlayerGameRecord], limit: usize) -> Vec<BestGame> {
    let groups = group_fold(
        players.iter().copied(),
        |r| r.player.as_str(),
        |acc: &mut Peak, r| acc.push(r),
    );
    let rows = groups
        .into_iter()
        .filter_map(|(player, peak)| match (peak.efficiency, peak.points) {
            (Some(best_efficiency), Some(best_points)) => Some(BestGame {
                player: player.to_string(),
                best_efficiency,
                best_points,
            }),
            _ => None,
        })
        .collect();
    rank_desc(rows, |r| r.best_efficiency, limit)
}
