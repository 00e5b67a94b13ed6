//! `statistella report` and `statistella options`: the dashboard in a terminal.

use serde::Serialize;
use tabled::Tabled;

use super::output::{self, OutputMode};
use crate::analytics::{DashboardResults, SeasonPoint, SeriesPoint};
use crate::dataset::FilterOptions;
use crate::domain::Season;

#[derive(Debug, Serialize, Tabled)]
pub struct CardRow {
    pub metric: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct SeasonRow {
    pub season: Season,
    pub value: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct SeriesRow {
    pub season: Season,
    pub series: String,
    pub value: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct RankRow {
    pub rank: usize,
    pub name: String,
    pub value: String,
    pub games: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ArchetypeRow {
    pub player: String,
    pub archetype: String,
    pub color: &'static str,
    pub avg_minutes: String,
    pub points_per_minute: String,
    pub games: usize,
}

#[derive(Debug, Serialize, Tabled)]
pub struct OptionRow {
    pub filter: &'static str,
    pub count: usize,
    pub first: String,
    pub last: String,
}

fn pct(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

fn season_rows(points: &[SeasonPoint], fmt: impl Fn(f64) -> String) -> Vec<SeasonRow> {
    points
        .iter()
        .map(|p| SeasonRow {
            season: p.season,
            value: fmt(p.value),
        })
        .collect()
}

fn series_rows(points: &[SeriesPoint], fmt: impl Fn(f64) -> String) -> Vec<SeriesRow> {
    points
        .iter()
        .map(|p| SeriesRow {
            season: p.season,
            series: p.series.clone(),
            value: fmt(p.value),
        })
        .collect()
}

fn rank_rows<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    row: impl Fn(&T) -> (String, String, String),
) -> Vec<RankRow> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let (name, value, games) = row(item);
            RankRow {
                rank: i + 1,
                name,
                value,
                games,
            }
        })
        .collect()
}

pub fn card_rows(results: &DashboardResults) -> Vec<CardRow> {
    let kpis = &results.kpis;
    vec![
        CardRow {
            metric: "Seasons Covered",
            value: kpis.seasons_label.clone(),
        },
        CardRow {
            metric: "Total Games",
            value: kpis.total_games.to_string(),
        },
        CardRow {
            metric: "Total Players",
            value: kpis.total_players.to_string(),
        },
        CardRow {
            metric: "Avg Points / Game",
            value: format!("{:.1}", kpis.avg_points),
        },
        CardRow {
            metric: "Home Win Rate",
            value: format!("{:.1}%", kpis.home_win_rate),
        },
        CardRow {
            metric: "Most Successful Team",
            value: results.badges.most_successful_team.clone(),
        },
        CardRow {
            metric: "Most Impactful Player",
            value: results.badges.most_impactful_player.clone(),
        },
    ]
}

/// Print every card, badge and chart table of a dashboard
pub fn print_dashboard(results: &DashboardResults, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        return output::print_item(results);
    }

    println!("Filters: {}", results.selection);
    output::print_section("Summary", &card_rows(results));

    let scoring = &results.scoring_trend;
    output::print_section(scoring.title, &season_rows(&scoring.data, |v| format!("{v:.1}")));

    let parity = &results.league_parity;
    output::print_section(parity.title, &season_rows(&parity.data, pct));

    let home_away = &results.home_away;
    output::print_section(home_away.title, &series_rows(&home_away.data, pct));

    let vs_league = &results.team_vs_league;
    output::print_section(
        vs_league.title,
        &series_rows(&vs_league.data.teams, |v| format!("{v:.1}")),
    );
    output::print_section(
        "League Avg",
        &season_rows(&vs_league.data.league, |v| format!("{v:.1}")),
    );

    let conference = &results.conference_scoring;
    output::print_section(conference.title, &series_rows(&conference.data, |v| format!("{v:.1}")));

    let consistency = &results.team_consistency;
    match results.team_consistency_message {
        Some(message) => {
            println!("\n\x1b[1m{}\x1b[0m", consistency.title);
            output::print_warn(message);
        }
        None => output::print_section(
            consistency.title,
            &season_rows(&consistency.data, |v| format!("{v:.2}")),
        ),
    }

    let teams = &results.most_successful_teams;
    output::print_section(
        teams.title,
        &rank_rows(&teams.data, |t| (t.team.clone(), pct(t.win_rate), t.games.to_string())),
    );

    let seasons = &results.dominant_seasons;
    output::print_section(
        seasons.title,
        &rank_rows(&seasons.data, |s| (s.label.clone(), pct(s.win_rate), String::new())),
    );

    let archetypes = &results.player_archetypes;
    let archetype_rows: Vec<ArchetypeRow> = archetypes
        .data
        .players
        .iter()
        .map(|p| ArchetypeRow {
            player: p.player.clone(),
            archetype: p.archetype.to_string(),
            color: p.archetype.color(),
            avg_minutes: format!("{:.1}", p.avg_minutes),
            points_per_minute: format!("{:.3}", p.points_per_minute),
            games: p.games,
        })
        .collect();
    output::print_section(archetypes.title, &archetype_rows);
    if let (Some(usage), Some(efficiency)) = (
        archetypes.data.usage_median,
        archetypes.data.efficiency_median,
    ) {
        println!("median minutes {usage:.1}, median points per minute {efficiency:.3}");
    }

    let scorers = &results.high_scorers;
    output::print_section(
        scorers.title,
        &rank_rows(&scorers.data, |s| (s.player.clone(), pct(s.rate), s.games.to_string())),
    );

    let impact = &results.most_impactful_players;
    output::print_section(
        impact.title,
        &rank_rows(&impact.data, |p| {
            (p.player.clone(), format!("{:.2}", p.avg_efficiency), p.games.to_string())
        }),
    );

    let best = &results.top_single_games;
    output::print_section(
        best.title,
        &rank_rows(&best.data, |b| {
            (
                b.player.clone(),
                format!("{:.1}", b.best_efficiency),
                format!("{:.0} pts", b.best_points),
            )
        }),
    );

    Ok(())
}

fn option_row<T: ToString>(filter: &'static str, values: &[T]) -> OptionRow {
    OptionRow {
        filter,
        count: values.len(),
        first: values.first().map(ToString::to_string).unwrap_or_default(),
        last: values.last().map(ToString::to_string).unwrap_or_default(),
    }
}

/// Print the values offered by each filter
pub fn print_options(options: &FilterOptions, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => output::print_item(options),
        OutputMode::Table => {
            let rows = vec![
                option_row("season", &options.seasons),
                option_row("team", &options.teams),
                option_row("player", &options.players),
            ];
            output::print_items(&rows, mode)
        }
    }
}
