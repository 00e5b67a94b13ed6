//! Filter-and-aggregate pipeline behind the dashboard
//!
//! `compute` filters the base tables once and derives every result set from
//! the same borrowed rows. Each aggregation is a total function, so an empty
//! selection degrades to zero counts, "N/A" badges and empty charts instead
//! of failing.

pub mod archetype;
pub mod colors;
pub mod filter;
pub mod kpi;
pub mod rankings;
pub mod stats;
pub mod trends;

use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::config::AnalyticsConfig;
use crate::dataset::Dataset;
use crate::domain::{FilterSelection, Season};

pub use archetype::{classify_players, Archetype, ArchetypeBreakdown, PlayerArchetype};
pub use colors::{build_palette, team_colors, ColorPair, Palette, DEFAULT_TEAM_COLOR};
pub use filter::FilteredTables;
pub use kpi::{Badges, KpiSummary, SeasonRange, ALL_SEASONS, NOT_AVAILABLE};
pub use rankings::{BestGame, HighScorer, PlayerImpact, TeamSeasonWinRate, TeamWinRate};
pub use trends::{SeasonPoint, SeriesPoint, TeamVsLeague};

/// Replaces the consistency chart when no team-season has two or more games
pub const NO_DATA_MESSAGE: &str = "No data for selected filters";

/// Reference marks drawn on top of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    /// Labelled vertical marker at a season, placed at `height`
    Era {
        season: Season,
        height: f64,
        label: &'static str,
    },
    VerticalLine { x: f64 },
    HorizontalLine { y: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart<T> {
    pub title: &'static str,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl<T> Chart<T> {
    fn new(title: &'static str, data: T) -> Self {
        Self {
            title,
            data,
            annotations: Vec::new(),
        }
    }

    fn annotate(mut self, annotation: Option<Annotation>) -> Self {
        self.annotations.extend(annotation);
        self
    }
}

/// Everything the dashboard renders for one filter selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardResults {
    pub selection: FilterSelection,
    pub kpis: KpiSummary,
    pub badges: Badges,
    pub scoring_trend: Chart<Vec<SeasonPoint>>,
    pub league_parity: Chart<Vec<SeasonPoint>>,
    pub home_away: Chart<Vec<SeriesPoint>>,
    pub team_vs_league: Chart<TeamVsLeague>,
    pub conference_scoring: Chart<Vec<SeriesPoint>>,
    pub team_consistency: Chart<Vec<SeasonPoint>>,
    /// Set instead of a consistency chart when the series is empty
    pub team_consistency_message: Option<&'static str>,
    pub most_successful_teams: Chart<Vec<TeamWinRate>>,
    pub dominant_seasons: Chart<Vec<TeamSeasonWinRate>>,
    pub player_archetypes: Chart<ArchetypeBreakdown>,
    pub high_scorers: Chart<Vec<HighScorer>>,
    pub most_impactful_players: Chart<Vec<PlayerImpact>>,
    pub top_single_games: Chart<Vec<BestGame>>,
    pub palette: Palette,
}

/// Run the whole pipeline for `selection`
#[instrument(skip(dataset, config), fields(selection = %selection))]
pub fn compute(
    dataset: &Dataset,
    selection: &FilterSelection,
    config: &AnalyticsConfig,
) -> DashboardResults {
    let started = Instant::now();
    let filtered = FilteredTables::apply(dataset.teams(), dataset.players(), selection);
    let teams = filtered.teams.as_slice();
    let players = filtered.players.as_slice();
    debug!(
        team_rows = teams.len(),
        player_rows = players.len(),
        "Filtered base tables"
    );

    let scoring = trends::scoring_trend(teams);
    let era = trends::era_marker_height(&scoring).map(|height| Annotation::Era {
        season: trends::THREE_POINT_ERA_SEASON,
        height,
        label: trends::THREE_POINT_ERA_LABEL,
    });

    let consistency = trends::team_consistency(teams);
    let team_consistency_message = consistency.is_empty().then_some(NO_DATA_MESSAGE);

    let breakdown =
        classify_players(players, config.archetype_min_games, config.archetype_min_avg_minutes);
    let usage_line = breakdown.usage_median.map(|x| Annotation::VerticalLine { x });
    let efficiency_line = breakdown.efficiency_median.map(|y| Annotation::HorizontalLine { y });

    let high_scorers = rankings::high_scorers(players, config.high_scorer_points, config.top_n);
    let impactful = rankings::most_impactful_players(players, config.impact_min_games, config.top_n);
    let best_games = rankings::top_single_games(players, config.top_n);

    let charted: BTreeSet<&str> = breakdown
        .players
        .iter()
        .map(|p| p.player.as_str())
        .chain(high_scorers.iter().map(|p| p.player.as_str()))
        .chain(impactful.iter().map(|p| p.player.as_str()))
        .chain(best_games.iter().map(|p| p.player.as_str()))
        .collect();
    let palette = build_palette(teams, players, charted);

    let results = DashboardResults {
        selection: selection.clone(),
        kpis: kpi::summarize(teams, players),
        badges: kpi::badges(teams, players),
        scoring_trend: Chart::new("Season-wise Average Points Per Team", scoring).annotate(era),
        league_parity: Chart::new(
            "League Competitiveness (Median Win %)",
            trends::league_parity(teams),
        ),
        home_away: Chart::new("Home vs Away Win Percentage", trends::home_away_trend(teams)),
        team_vs_league: Chart::new("Team Scoring vs League Average", trends::team_vs_league(teams)),
        conference_scoring: Chart::new(
            "Eastern vs Western Conference Scoring",
            trends::conference_scoring(teams),
        ),
        team_consistency: Chart::new("League-wide Team Consistency", consistency),
        team_consistency_message,
        most_successful_teams: Chart::new(
            "Most Successful Teams (Win Percentage)",
            rankings::most_successful_teams(teams, config.top_n),
        ),
        dominant_seasons: Chart::new(
            "Most Dominant Team Seasons",
            rankings::dominant_seasons(teams, config.top_n),
        ),
        player_archetypes: Chart::new("Player Archetypes: Usage vs Scoring Efficiency", breakdown)
            .annotate(usage_line)
            .annotate(efficiency_line),
        high_scorers: Chart::new("Most Consistent 20+ Point Scorers", high_scorers),
        most_impactful_players: Chart::new(
            "Most Impactful Players (Avg Efficiency per Game)",
            impactful,
        ),
        top_single_games: Chart::new(
            "Top Single-Game Performances (Best Game per Player)",
            best_games,
        ),
        palette,
    };

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Dashboard computed"
    );
    results
}
