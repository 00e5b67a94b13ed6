use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::flags;

/// Season identifier as stored in the processed datasets (e.g. 2015)
pub type Season = u16;

/// Conference a franchise plays in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::East => "East",
            Conference::West => "West",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Conference {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "east" => Ok(Conference::East),
            "west" => Ok(Conference::West),
            other => Err(format!("unknown conference: {other:?}")),
        }
    }
}

/// Whether the team played at home or on the road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Venue::Home)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Venue {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Venue::Home),
            "away" => Ok(Venue::Away),
            other => Err(format!("unknown home/away flag: {other:?}")),
        }
    }
}

/// One row per team per game (`team_game_stats.csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameRecord {
    #[serde(rename = "SEASON")]
    pub season: Season,
    /// Team nickname, the identity key for teams (e.g. "Lakers")
    #[serde(rename = "NICKNAME")]
    pub team: String,
    #[serde(rename = "CONFERENCE")]
    pub conference: Conference,
    /// Absent when the export has no GAME_ID column
    #[serde(rename = "GAME_ID", default)]
    pub game_id: Option<String>,
    #[serde(rename = "PTS")]
    pub points: f64,
    #[serde(rename = "WIN", deserialize_with = "flags::deserialize_win")]
    pub win: bool,
    #[serde(rename = "HOME_AWAY")]
    pub venue: Venue,
    /// Margin of victory (positive) or defeat (negative)
    #[serde(rename = "POINT_DIFF")]
    pub point_diff: f64,
    #[serde(
        rename = "GAME_DATE_EST",
        default,
        deserialize_with = "flags::deserialize_game_date"
    )]
    pub game_date: Option<NaiveDate>,
}

impl TeamGameRecord {
    /// Win as 0/1 so it can be averaged into a rate
    pub fn win_value(&self) -> f64 {
        if self.win {
            1.0
        } else {
            0.0
        }
    }
}
