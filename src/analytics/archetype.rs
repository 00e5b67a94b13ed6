//! Usage-versus-efficiency player archetypes
//!
//! Players with enough games and minutes are placed in one of four
//! quadrants split at the median average minutes (usage) and the median
//! points per minute (efficiency) of the qualifying population. Values equal
//! to a median fall on the upper side.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::stats::{group_fold, median, Mean};
use crate::domain::PlayerGameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Archetype {
    #[serde(rename = "High-Usage Stars")]
    HighUsageStar,
    #[serde(rename = "Volume Scorers")]
    VolumeScorer,
    #[serde(rename = "Efficient Role Players")]
    EfficientRolePlayer,
    #[serde(rename = "Low-Impact Bench Players")]
    LowImpactBench,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::HighUsageStar,
        Archetype::VolumeScorer,
        Archetype::EfficientRolePlayer,
        Archetype::LowImpactBench,
    ];

    pub fn classify(high_usage: bool, high_efficiency: bool) -> Self {
        match (high_usage, high_efficiency) {
            (true, true) => Archetype::HighUsageStar,
            (true, false) => Archetype::VolumeScorer,
            (false, true) => Archetype::EfficientRolePlayer,
            (false, false) => Archetype::LowImpactBench,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Archetype::HighUsageStar => "High-Usage Stars",
            Archetype::VolumeScorer => "Volume Scorers",
            Archetype::EfficientRolePlayer => "Efficient Role Players",
            Archetype::LowImpactBench => "Low-Impact Bench Players",
        }
    }

    /// Marker color on the archetype scatter
    pub fn color(&self) -> &'static str {
        match self {
            Archetype::HighUsageStar => "#f94144",
            Archetype::VolumeScorer => "#f3722c",
            Archetype::EfficientRolePlayer => "#43aa8b",
            Archetype::LowImpactBench => "#577590",
        }
    }

    /// Marker color of every archetype, keyed by label when serialized
    pub fn color_map() -> BTreeMap<Archetype, &'static str> {
        Archetype::ALL.iter().map(|a| (*a, a.color())).collect()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerArchetype {
    pub player: String,
    pub games: usize,
    pub avg_minutes: f64,
    pub avg_points: f64,
    pub points_per_minute: f64,
    pub archetype: Archetype,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeBreakdown {
    pub players: Vec<PlayerArchetype>,
    /// `None` when no player qualifies
    pub usage_median: Option<f64>,
    pub efficiency_median: Option<f64>,
    pub colors: BTreeMap<Archetype, &'static str>,
}

impl ArchetypeBreakdown {
    pub fn count(&self, archetype: Archetype) -> usize {
        self.players
            .iter()
            .filter(|p| p.archetype == archetype)
            .count()
    }
}

#[derive(Debug, Default)]
struct Usage {
    minutes: Mean,
    points: Mean,
}

struct Qualified<'a> {
    player: &'a str,
    games: usize,
    avg_minutes: f64,
    avg_points: f64,
    points_per_minute: f64,
}

pub fn classify_players(
    players: &[&PlayerGameRecord],
    min_games: usize,
    min_avg_minutes: f64,
) -> ArchetypeBreakdown {
    let groups = group_fold(
        players.iter().copied(),
        |r| r.player.as_str(),
        |acc: &mut Usage, r| {
            acc.minutes.push(r.minutes);
            acc.points.push(r.points);
        },
    );

    let qualified: Vec<Qualified<'_>> = groups
        .into_iter()
        .filter_map(|(player, usage)| {
            let games = usage.minutes.count();
            let avg_minutes = usage.minutes.value()?;
            let avg_points = usage.points.value()?;
            if games < min_games || avg_minutes < min_avg_minutes || avg_minutes <= 0.0 {
                return None;
            }
            Some(Qualified {
                player,
                games,
                avg_minutes,
                avg_points,
                points_per_minute: avg_points / avg_minutes,
            })
        })
        .collect();

    let usage_median = median(qualified.iter().map(|q| q.avg_minutes).collect());
    let efficiency_median = median(qualified.iter().map(|q| q.points_per_minute).collect());

    let players = match (usage_median, efficiency_median) {
        (Some(usage_cut), Some(efficiency_cut)) => qualified
            .into_iter()
            .map(|q| PlayerArchetype {
                player: q.player.to_string(),
                games: q.games,
                avg_minutes: q.avg_minutes,
                avg_points: q.avg_points,
                points_per_minute: q.points_per_minute,
                archetype: Archetype::classify(
                    q.avg_minutes >= usage_cut,
                    q.points_per_minute >= efficiency_cut,
                ),
            })
            .collect(),
        _ => Vec::new(),
    };

    ArchetypeBreakdown {
        players,
        usage_median,
        efficiency_median,
        colors: Archetype::color_map(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games(player: &str, count: usize, minutes: f64, points: f64) -> Vec<PlayerGameRecord> {
        (0..count)
            .map(|_| PlayerGameRecord {
                season: 2018,
                player: player.to_string(),
                team: "Rockets".to_string(),
                minutes,
                points,
                efficiency: points,
                game_id: None,
                game_date: None,
            })
            .collect()
    }

    fn population() -> Vec<PlayerGameRecord> {
        let mut rows = Vec::new();
        rows.extend(games("James Harden", 40, 36.0, 36.0)); // usage high, 1.00 ppm
        rows.extend(games("Chris Paul", 40, 32.0, 16.0)); // usage high, 0.50 ppm
        rows.extend(games("Eric Gordon", 40, 28.0, 22.4)); // usage low, 0.80 ppm
        rows.extend(games("PJ Tucker", 40, 20.0, 6.0)); // usage low, 0.30 ppm
        rows.extend(games("Too Few Games", 10, 40.0, 40.0));
        rows.extend(games("Garbage Time", 50, 4.0, 2.0));
        rows
    }

    #[test]
    fn test_classifies_into_quadrants() {
        let rows = population();
        let refs: Vec<&PlayerGameRecord> = rows.iter().collect();
        let breakdown = classify_players(&refs, 30, 8.0);

        assert_eq!(breakdown.players.len(), 4);
        assert_eq!(breakdown.usage_median, Some(30.0));
        let efficiency = breakdown.efficiency_median.unwrap();
        assert!((efficiency - 0.65).abs() < 1e-9);

        let label_of = |name: &str| {
            breakdown
                .players
                .iter()
                .find(|p| p.player == name)
                .map(|p| p.archetype)
        };
        assert_eq!(label_of("James Harden"), Some(Archetype::HighUsageStar));
        assert_eq!(label_of("Chris Paul"), Some(Archetype::VolumeScorer));
        assert_eq!(label_of("Eric Gordon"), Some(Archetype::EfficientRolePlayer));
        assert_eq!(label_of("PJ Tucker"), Some(Archetype::LowImpactBench));
        assert_eq!(label_of("Too Few Games"), None);
        assert_eq!(label_of("Garbage Time"), None);
    }

    #[test]
    fn test_groups_partition_the_qualified_players() {
        let rows = population();
        let refs: Vec<&PlayerGameRecord> = rows.iter().collect();
        let breakdown = classify_players(&refs, 30, 8.0);

        let total: usize = Archetype::ALL.iter().map(|a| breakdown.count(*a)).sum();
        assert_eq!(total, breakdown.players.len());
    }

    #[test]
    fn test_ties_go_to_upper_quadrant() {
        let rows = games("Only Player", 30, 8.0, 4.0);
        let refs: Vec<&PlayerGameRecord> = rows.iter().collect();
        let breakdown = classify_players(&refs, 30, 8.0);

        assert_eq!(breakdown.players.len(), 1);
        assert_eq!(breakdown.players[0].archetype, Archetype::HighUsageStar);
    }

    #[test]
    fn test_classification_ignores_row_order() {
        let mut rows = population();
        let refs: Vec<&PlayerGameRecord> = rows.iter().collect();
        let mut forward = classify_players(&refs, 30, 8.0).players;

        rows.reverse();
        let refs: Vec<&PlayerGameRecord> = rows.iter().collect();
        let mut backward = classify_players(&refs, 30, 8.0).players;

        forward.sort_by(|a, b| a.player.cmp(&b.player));
        backward.sort_by(|a, b| a.player.cmp(&b.player));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_nobody_qualifies() {
        let breakdown = classify_players(&[], 30, 8.0);
        assert!(breakdown.players.is_empty());
        assert_eq!(breakdown.usage_median, None);
        assert_eq!(breakdown.efficiency_median, None);
        assert_eq!(breakdown.colors.len(), 4);
    }

    #[test]
    fn test_color_map_serializes_by_label() {
        let breakdown = classify_players(&[], 30, 8.0);
        let json = serde_json::to_value(&breakdown).unwrap();

        assert_eq!(json["colors"]["High-Usage Stars"], "#f94144");
        assert_eq!(json["colors"]["Volume Scorers"], "#f3722c");
        assert_eq!(json["colors"]["Efficient Role Players"], "#43aa8b");
        assert_eq!(json["colors"]["Low-Impact Bench Players"], "#577590");
    }
}
