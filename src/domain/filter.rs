use serde::{Deserialize, Serialize};

use super::{PlayerGameRecord, Season, TeamGameRecord};

/// User-selected dashboard filters
///
/// Each dimension is a set of accepted values. An empty set means the
/// dimension is unrestricted; non-empty dimensions are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub seasons: Vec<Season>,
    pub teams: Vec<String>,
    pub players: Vec<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons.extend(seasons);
        self
    }

    pub fn with_teams<S: Into<String>>(mut self, teams: impl IntoIterator<Item = S>) -> Self {
        self.teams.extend(teams.into_iter().map(Into::into));
        self
    }

    pub fn with_players<S: Into<String>>(mut self, players: impl IntoIterator<Item = S>) -> Self {
        self.players.extend(players.into_iter().map(Into::into));
        self
    }

    /// True when no dimension restricts anything
    pub fn is_unrestricted(&self) -> bool {
        self.seasons.is_empty() && self.teams.is_empty() && self.players.is_empty()
    }

    fn accepts_season(&self, season: Season) -> bool {
        self.seasons.is_empty() || self.seasons.contains(&season)
    }

    fn accepts_team(&self, team: &str) -> bool {
        self.teams.is_empty() || self.teams.iter().any(|t| t == team)
    }

    fn accepts_player(&self, player: &str) -> bool {
        self.players.is_empty() || self.players.iter().any(|p| p == player)
    }

    /// Team rows are only constrained by season and team
    pub fn matches_team_row(&self, row: &TeamGameRecord) -> bool {
        self.accepts_season(row.season) && self.accepts_team(&row.team)
    }

    pub fn matches_player_row(&self, row: &PlayerGameRecord) -> bool {
        self.accepts_season(row.season)
            && self.accepts_team(&row.team)
            && self.accepts_player(&row.player)
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unrestricted() {
            return write!(f, "all");
        }
        write!(
            f,
            "seasons={:?} teams={:?} players={:?}",
            self.seasons, self.teams, self.players
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_unrestricted() {
        let selection = FilterSelection::new();
        assert!(selection.is_unrestricted());
        assert_eq!(selection.to_string(), "all");
    }

    #[test]
    fn test_selection_deserializes_with_missing_fields() {
        let selection: FilterSelection = serde_json::from_str(r#"{"teams":["Heat"]}"#).unwrap();
        assert_eq!(selection, FilterSelection::new().with_teams(["Heat"]));
    }
}
