use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{flags, Season};

/// One row per player per game (`player_game_stats.csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameRecord {
    #[serde(rename = "SEASON")]
    pub season: Season,
    #[serde(rename = "PLAYER_NAME")]
    pub player: String,
    /// Nickname of the team the player appeared for in this game
    #[serde(rename = "NICKNAME")]
    pub team: String,
    #[serde(rename = "MINUTES_PLAYED")]
    pub minutes: f64,
    #[serde(rename = "PTS")]
    pub points: f64,
    /// Precomputed composite performance metric, treated as opaque
    #[serde(rename = "EFFICIENCY_SCORE")]
    pub efficiency: f64,
    #[serde(rename = "GAME_ID", default)]
    pub game_id: Option<String>,
    #[serde(
        rename = "GAME_DATE_EST",
        default,
        deserialize_with = "flags::deserialize_game_date"
    )]
    pub game_date: Option<NaiveDate>,
}
