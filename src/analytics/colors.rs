//! Team and player chart colors.

use serde::Serialize;
use std::collections::BTreeMap;

use super::stats::group_fold;
use crate::domain::{PlayerGameRecord, TeamGameRecord};

pub const DEFAULT_TEAM_COLOR: &str = "#888888";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub primary: &'static str,
    /// Outline color
    pub secondary: &'static str,
}

impl ColorPair {
    pub const DEFAULT: ColorPair = ColorPair::new(DEFAULT_TEAM_COLOR, DEFAULT_TEAM_COLOR);

    pub const fn new(primary: &'static str, secondary: &'static str) -> Self {
        Self { primary, secondary }
    }
}

/// Franchise colors by nickname; any other name gets [`ColorPair::DEFAULT`]
pub fn team_colors(team: &str) -> ColorPair {
    match team {
        "Hawks" => ColorPair::new("#E03A3E", "#C1D32F"),
        "Celtics" => ColorPair::new("#007A33", "#BA9653"),
        "Nets" => ColorPair::new("#000000", "#FFFFFF"),
        "Hornets" => ColorPair::new("#1D1160", "#00788C"),
        "Bulls" => ColorPair::new("#CE1141", "#000000"),
        "Cavaliers" => ColorPair::new("#860038", "#FDBB30"),
        "Mavericks" => ColorPair::new("#00538C", "#B8C4CA"),
        "Nuggets" => ColorPair::new("#0E2240", "#FEC524"),
        "Pistons" => ColorPair::new("#C8102E", "#1D42BA"),
        "Warriors" => ColorPair::new("#1D428A", "#FFC72C"),
        "Rockets" => ColorPair::new("#CE1141", "#C4CED4"),
        "Pacers" => ColorPair::new("#002D62", "#FDBB30"),
        "Clippers" => ColorPair::new("#C8102E", "#1D428A"),
        "Lakers" => ColorPair::new("#552583", "#FDB927"),
        "Grizzlies" => ColorPair::new("#5D76A9", "#12173F"),
        "Heat" => ColorPair::new("#98002E", "#F9A01B"),
        "Bucks" => ColorPair::new("#00471B", "#EEE1C6"),
        "Timberwolves" => ColorPair::new("#0C2340", "#236192"),
        "Pelicans" => ColorPair::new("#0C2340", "#C8102E"),
        "Knicks" => ColorPair::new("#006BB6", "#F58426"),
        "Thunder" => ColorPair::new("#007AC1", "#EF3B24"),
        "Magic" => ColorPair::new("#0077C0", "#C4CED4"),
        "76ers" => ColorPair::new("#006BB6", "#ED174C"),
        "Suns" => ColorPair::new("#1D1160", "#E56020"),
        "Trail Blazers" => ColorPair::new("#E03A3E", "#000000"),
        "Kings" => ColorPair::new("#5A2D81", "#63727A"),
        "Spurs" => ColorPair::new("#C4CED4", "#000000"),
        "Raptors" => ColorPair::new("#CE1141", "#000000"),
        "Jazz" => ColorPair::new("#002B5C", "#F9A01B"),
        "Wizards" => ColorPair::new("#002B5C", "#E31837"),
        _ => ColorPair::DEFAULT,
    }
}

/// Colors of the fixed (non-team) series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesColors {
    pub home: &'static str,
    pub away: &'static str,
    pub east: &'static str,
    pub west: &'static str,
    pub league: &'static str,
}

pub const SERIES_COLORS: SeriesColors = SeriesColors {
    home: "#4CAF50",
    away: "#F44336",
    east: "#1E88E5",
    west: "#E53935",
    league: "#FFD700",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub teams: BTreeMap<String, ColorPair>,
    pub players: BTreeMap<String, ColorPair>,
    pub series: SeriesColors,
}

/// Most frequent team of each player in `players`
///
/// The first team encountered wins a tie. Players keep first-appearance order.
pub fn player_teams<'a>(players: &[&'a PlayerGameRecord]) -> Vec<(&'a str, &'a str)> {
    let groups = group_fold(
        players.iter().copied(),
        |r| r.player.as_str(),
        |acc: &mut Vec<(&'a str, usize)>, r| match acc.iter().position(|(t, _)| *t == r.team) {
            Some(i) => acc[i].1 += 1,
            None => acc.push((r.team.as_str(), 1)),
        },
    );

    groups
        .into_iter()
        .filter_map(|(player, counts)| {
            let mut best: Option<(&str, usize)> = None;
            for (team, count) in counts {
                if best.map_or(true, |(_, top)| count > top) {
                    best = Some((team, count));
                }
            }
            best.map(|(team, _)| (player, team))
        })
        .collect()
}

/// Palette for every team in `teams` and every player named in `shown`
///
/// A shown player without rows in `players` gets the default colors.
pub fn build_palette<'s>(
    teams: &[&TeamGameRecord],
    players: &[&PlayerGameRecord],
    shown: impl IntoIterator<Item = &'s str>,
) -> Palette {
    let team_colors_map = teams
        .iter()
        .map(|r| (r.team.clone(), team_colors(&r.team)))
        .collect();

    let modes: BTreeMap<&str, &str> = player_teams(players).into_iter().collect();
    let player_colors = shown
        .into_iter()
        .map(|player| {
            let colors = modes
                .get(player)
                .map_or(ColorPair::DEFAULT, |team| team_colors(team));
            (player.to_string(), colors)
        })
        .collect();

    Palette {
        teams: team_colors_map,
        players: player_colors,
        series: SERIES_COLORS,
    }
}
