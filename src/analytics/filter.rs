use crate::domain::{FilterSelection, PlayerGameRecord, TeamGameRecord};

/// Borrowed views of the base tables after a filter selection
///
/// Rows keep their original relative order; the base tables are never
/// copied or mutated.
#[derive(Debug, Clone, Default)]
pub struct FilteredTables<'a> {
    pub teams: Vec<&'a TeamGameRecord>,
    pub players: Vec<&'a PlayerGameRecord>,
}

impl<'a> FilteredTables<'a> {
    pub fn apply(
        teams: &'a [TeamGameRecord],
        players: &'a [PlayerGameRecord],
        selection: &FilterSelection,
    ) -> Self {
        Self {
            teams: filter_teams(teams, selection),
            players: filter_players(players, selection),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.players.is_empty()
    }
}

pub fn filter_teams<'a>(
    rows: impl IntoIterator<Item = &'a TeamGameRecord>,
    selection: &FilterSelection,
) -> Vec<&'a TeamGameRecord> {
    rows.into_iter()
        .filter(|row| selection.matches_team_row(row))
        .collect()
}

pub fn filter_players<'a>(
    rows: impl IntoIterator<Item = &'a PlayerGameRecord>,
    selection: &FilterSelection,
) -> Vec<&'a PlayerGameRecord> {
    rows.into_iter()
        .filter(|row| selection.matches_player_row(row))
        .collect()
}
