//! Process-wide, read-only game statistics
//!
//! The two base tables are decoded once at startup and shared behind `Arc`
//! slices. Nothing mutates them afterwards, so request handlers clone the
//! `Dataset` handle freely and read it without synchronization.

pub mod loader;

use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::DataConfig;
use crate::domain::{PlayerGameRecord, Season, TeamGameRecord};
use crate::error::Result;

pub use loader::{load_player_stats, load_team_stats, read_records};

/// Immutable snapshot of both base tables
#[derive(Debug, Clone)]
pub struct Dataset {
    teams: Arc<[TeamGameRecord]>,
    players: Arc<[PlayerGameRecord]>,
}

/// Values offered by the season, team and player filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub seasons: Vec<Season>,
    pub teams: Vec<String>,
    pub players: Vec<String>,
}

impl Dataset {
    pub fn new(teams: Vec<TeamGameRecord>, players: Vec<PlayerGameRecord>) -> Self {
        Self {
            teams: teams.into(),
            players: players.into(),
        }
    }

    /// Load both tables from the configured CSV paths
    pub fn load(config: &DataConfig) -> Result<Self> {
        let teams = load_team_stats(&config.team_stats_path)?;
        let players = load_player_stats(&config.player_stats_path)?;
        Ok(Self::new(teams, players))
    }

    pub fn teams(&self) -> &[TeamGameRecord] {
        &self.teams
    }

    pub fn players(&self) -> &[PlayerGameRecord] {
        &self.players
    }

    pub fn team_row_count(&self) -> usize {
        self.teams.len()
    }

    pub fn player_row_count(&self) -> usize {
        self.players.len()
    }

    /// Sorted distinct seasons and teams (team table) and players (player table)
    pub fn filter_options(&self) -> FilterOptions {
        let seasons: BTreeSet<Season> = self.teams.iter().map(|r| r.season).collect();
        let teams: BTreeSet<&str> = self.teams.iter().map(|r| r.team.as_str()).collect();
        let players: BTreeSet<&str> = self.players.iter().map(|r| r.player.as_str()).collect();

        FilterOptions {
            seasons: seasons.into_iter().collect(),
            teams: teams.into_iter().map(str::to_string).collect(),
            players: players.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Conference, Venue};

    fn team_row(season: Season, team: &str) -> TeamGameRecord {
        TeamGameRecord {
            season,
            team: team.to_string(),
            conference: Conference::West,
            game_id: None,
            points: 100.0,
            win: true,
            venue: Venue::Home,
            point_diff: 5.0,
            game_date: None,
        }
    }

    fn player_row(player: &str) -> PlayerGameRecord {
        PlayerGameRecord {
            season: 2020,
            player: player.to_string(),
            team: "Suns".to_string(),
            minutes: 30.0,
            points: 12.0,
            efficiency: 14.0,
            game_id: None,
            game_date: None,
        }
    }

    #[test]
    fn test_filter_options_are_sorted_and_distinct() {
        let dataset = Dataset::new(
            vec![
                team_row(2021, "Suns"),
                team_row(2019, "Jazz"),
                team_row(2021, "Jazz"),
            ],
            vec![player_row("Devin Booker"), player_row("Chris Paul"), player_row("Devin Booker")],
        );

        let options = dataset.filter_options();
        assert_eq!(options.seasons, vec![2019, 2021]);
        assert_eq!(options.teams, vec!["Jazz", "Suns"]);
        assert_eq!(options.players, vec!["Chris Paul", "Devin Booker"]);
    }

    #[test]
    fn test_clones_share_rows() {
        let dataset = Dataset::new(vec![team_row(2021, "Suns")], Vec::new());
        let clone = dataset.clone();
        assert!(std::ptr::eq(dataset.teams().as_ptr(), clone.teams().as_ptr()));
        assert_eq!(clone.player_row_count(), 0);
    }
}
