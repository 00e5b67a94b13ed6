//! Season-keyed time series over the team table.

use serde::Serialize;
use std::collections::BTreeMap;

use super::stats::{group_fold, median, sample_std_dev, Mean};
use crate::domain::{Season, TeamGameRecord};

/// Season marked on the scoring trend as the start of the three-point era
pub const THREE_POINT_ERA_SEASON: Season = 2015;
pub const THREE_POINT_ERA_LABEL: &str = "Three-Point Revolution";

/// Series name of the league reference line on the team scoring chart
pub const LEAGUE_AVG_SERIES: &str = "League Avg";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonPoint {
    pub season: Season,
    pub value: f64,
}

/// One point of a multi-series chart, `series` names the line it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub season: Season,
    pub series: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamVsLeague {
    pub teams: Vec<SeriesPoint>,
    pub league: Vec<SeasonPoint>,
}

/// Mean of `metric` per season, ascending by season
fn mean_by_season(
    teams: &[&TeamGameRecord],
    metric: impl Fn(&TeamGameRecord) -> f64,
) -> Vec<SeasonPoint> {
    let mut by_season: BTreeMap<Season, Mean> = BTreeMap::new();
    for &row in teams {
        by_season.entry(row.season).or_default().push(metric(row));
    }
    by_season
        .into_iter()
        .filter_map(|(season, mean)| mean.value().map(|value| SeasonPoint { season, value }))
        .collect()
}

/// Mean of `metric` per (season, series), ascending by season then series
fn mean_by_season_and<S: Ord + ToString>(
    teams: &[&TeamGameRecord],
    series: impl Fn(&TeamGameRecord) -> S,
    metric: impl Fn(&TeamGameRecord) -> f64,
) -> Vec<SeriesPoint> {
    let mut groups: BTreeMap<(Season, S), Mean> = BTreeMap::new();
    for &row in teams {
        groups
            .entry((row.season, series(row)))
            .or_default()
            .push(metric(row));
    }
    groups
        .into_iter()
        .filter_map(|((season, key), mean)| {
            mean.value().map(|value| SeriesPoint {
                season,
                series: key.to_string(),
                value,
            })
        })
        .collect()
}

/// Season-wise average points per team-game
pub fn scoring_trend(teams: &[&TeamGameRecord]) -> Vec<SeasonPoint> {
    mean_by_season(teams, |r| r.points)
}

/// Where the era marker sits on the scoring trend, if the trend has points
pub fn era_marker_height(trend: &[SeasonPoint]) -> Option<f64> {
    trend.iter().map(|p| p.value).reduce(f64::max)
}

/// Median across teams of each team's win rate, per season
///
/// Measures competitive balance: a median near 0.5 means a level league.
pub fn league_parity(teams: &[&TeamGameRecord]) -> Vec<SeasonPoint> {
    per_team_by_season(teams, |rows| {
        let mut mean = Mean::default();
        rows.iter().for_each(|r| mean.push(r.win_value()));
        mean.value()
    })
}

/// Win rate per season split by home and away games
pub fn home_away_trend(teams: &[&TeamGameRecord]) -> Vec<SeriesPoint> {
    mean_by_season_and(teams, |r| r.venue, |r| r.win_value())
}

/// Average points per (season, team) and the league average per season
pub fn team_vs_league(teams: &[&TeamGameRecord]) -> TeamVsLeague {
    TeamVsLeague {
        teams: mean_by_season_and(teams, |r| r.team.clone(), |r| r.points),
        league: mean_by_season(teams, |r| r.points),
    }
}

/// Average points per season split by conference
pub fn conference_scoring(teams: &[&TeamGameRecord]) -> Vec<SeriesPoint> {
    mean_by_season_and(teams, |r| r.conference, |r| r.points)
}

/// Median across teams of the point-differential standard deviation, per season
///
/// Team-seasons with a single game have no standard deviation and are
/// skipped; a season where no team has one is dropped entirely. An empty
/// result means the current filters cannot produce the metric.
pub fn team_consistency(teams: &[&TeamGameRecord]) -> Vec<SeasonPoint> {
    per_team_by_season(teams, |rows| {
        let diffs: Vec<f64> = rows.iter().map(|r| r.point_diff).collect();
        sample_std_dev(&diffs)
    })
}

/// Two-stage reduction: `per_team` over each season×team group, then the
/// median of the defined values across teams within each season
fn per_team_by_season(
    teams: &[&TeamGameRecord],
    per_team: impl Fn(&[&TeamGameRecord]) -> Option<f64>,
) -> Vec<SeasonPoint> {
    let groups = group_fold(
        teams.iter().copied(),
        |r| (r.season, r.team.as_str()),
        |acc: &mut Vec<&TeamGameRecord>, r| acc.push(r),
    );

    let mut by_season: BTreeMap<Season, Vec<f64>> = BTreeMap::new();
    for ((season, _), rows) in groups {
        let values = by_season.entry(season).or_default();
        if let Some(value) = per_team(&rows) {
            values.push(value);
        }
    }

    by_season
        .into_iter()
        .filter_map(|(season, values)| median(values).map(|value| SeasonPoint { season, value }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Conference, Venue};

    fn game(
        season: Season,
        team: &str,
        conference: Conference,
        venue: Venue,
        points: f64,
        point_diff: f64,
    ) -> TeamGameRecord {
        TeamGameRecord {
            season,
            team: team.to_string(),
            conference,
            game_id: None,
            points,
            win: point_diff > 0.0,
            venue,
            point_diff,
            game_date: None,
        }
    }

    fn sample() -> Vec<TeamGameRecord> {
        use Conference::*;
        use Venue::*;
        vec![
            game(2015, "Warriors", West, Home, 110.0, 10.0),
            game(2015, "Warriors", West, Away, 106.0, 6.0),
            game(2015, "Cavaliers", East, Home, 100.0, -2.0),
            game(2015, "Cavaliers", East, Away, 98.0, -6.0),
            game(2014, "Spurs", West, Home, 102.0, 3.0),
            game(2014, "Spurs", West, Away, 96.0, -1.0),
        ]
    }

    #[test]
    fn test_scoring_trend_is_sorted_by_season() {
        let rows = sample();
        let refs: Vec<&TeamGameRecord> = rows.iter().collect();
        let trend = scoring_trend(&refs);
        assert_eq!(
            trend,
            vec![
                SeasonPoint { season: 2014, value: 99.0 },
                SeasonPoint { season: 2015, value: 103.5 },
            ]
        );
        assert_eq!(era_marker_height(&trend), Some(103.5));
        assert_eq!(era_marker_height(&[]), None);
    }

    #[test]
    fn test_league_parity_is_median_of_team_rates() {
        let rows = sample();
        let refs: Vec<&TeamGameRecord> = rows.iter().collect();
        let parity = league_parity(&refs);
        // 2015: Warriors 1.0, Cavaliers 0.0 -> 0.5; 2014: Spurs 0.5
        assert_eq!(
            parity,
            vec![
                SeasonPoint { season: 2014, value: 0.5 },
                SeasonPoint { season: 2015, value: 0.5 },
            ]
        );
    }

    #[test]
    fn test_home_away_and_conference_splits() {
        let rows = sample();
        let refs: Vec<&TeamGameRecord> = rows.iter().collect();

        let venue = home_away_trend(&refs);
        assert_eq!(venue.len(), 4);
        assert_eq!(venue[0].series, "Home");
        assert_eq!(venue[0].value, 1.0);
        assert_eq!(venue[1].series, "Away");
        assert_eq!(venue[1].value, 0.0);

        let conference = conference_scoring(&refs);
        let east_2015 = conference
            .iter()
            .find(|p| p.season == 2015 && p.series == "East")
            .unwrap();
        assert_eq!(east_2015.value, 99.0);
    }

    #[test]
    fn test_team_vs_league() {
        let rows = sample();
        let refs: Vec<&TeamGameRecord> = rows.iter().collect();
        let chart = team_vs_league(&refs);
        assert_eq!(chart.league.len(), 2);
        assert_eq!(chart.teams.len(), 3);
        assert_eq!(chart.teams[1].series, "Cavaliers");
        assert_eq!(chart.teams[2].value, 108.0);
    }

    #[test]
    fn test_team_consistency() {
        let rows = sample();
        let refs: Vec<&TeamGameRecord> = rows.iter().collect();
        let consistency = team_consistency(&refs);
        assert_eq!(consistency.len(), 2);
        // every team-season has two games four points apart -> sd = sqrt(8)
        for point in consistency {
            assert!((point.value - 8f64.sqrt()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_team_consistency_empty_with_single_games() {
        let rows = vec![
            game(2015, "Warriors", Conference::West, Venue::Home, 110.0, 10.0),
            game(2015, "Cavaliers", Conference::East, Venue::Away, 100.0, -10.0),
            game(2016, "Warriors", Conference::West, Venue::Away, 101.0, 1.0),
        ];
        let refs: Vec<&TeamGameRecord> = rows.iter().collect();
        assert!(team_consistency(&refs).is_empty());
    }
}
