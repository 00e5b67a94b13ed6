use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{FilterSelection, Season};
use crate::error::{Result, StatistellaError};

// ============================================================================
// Dashboard Types
// ============================================================================

/// Query string form of a filter selection
///
/// Each field is a comma-separated list; a missing or blank list places no
/// restriction.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub seasons: Option<String>,
    pub teams: Option<String>,
    pub players: Option<String>,
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl DashboardQuery {
    pub fn into_selection(self) -> Result<FilterSelection> {
        let seasons = split_list(self.seasons.as_deref())
            .map(|s| {
                s.parse::<Season>()
                    .map_err(|_| StatistellaError::InvalidFilter(format!("invalid season `{}`", s)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FilterSelection::new()
            .with_seasons(seasons)
            .with_teams(split_list(self.teams.as_deref()))
            .with_players(split_list(self.players.as_deref())))
    }
}

// ============================================================================
// System Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_secs: u64,
    pub team_rows: usize,
    pub player_rows: usize,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_lists_are_trimmed_and_blank_is_unrestricted() {
        let query = DashboardQuery {
            seasons: Some("2019, 2020,".to_string()),
            teams: Some(" ".to_string()),
            players: Some("LeBron James,Anthony Davis".to_string()),
        };

        let selection = query.into_selection().unwrap();
        assert_eq!(selection.seasons, vec![2019, 2020]);
        assert!(selection.teams.is_empty());
        assert_eq!(selection.players, vec!["LeBron James", "Anthony Davis"]);
    }

    #[test]
    fn test_query_rejects_bad_season() {
        let query = DashboardQuery {
            seasons: Some("2019,twenty".to_string()),
            ..Default::default()
        };

        let err = query.into_selection().unwrap_err();
        assert!(matches!(err, StatistellaError::InvalidFilter(_)));
        assert!(err.to_string().contains("twenty"));
    }

    #[test]
    fn test_empty_query_is_unrestricted() {
        let selection = DashboardQuery::default().into_selection().unwrap();
        assert!(selection.is_unrestricted());
    }
}
