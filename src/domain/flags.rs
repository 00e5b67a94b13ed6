//! Lenient decoders for columns whose encoding varies between exports.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};

/// Parse a win indicator written as 1/0, 1.0/0.0, true/false or W/L
pub fn parse_win_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" | "t" | "w" | "win" => Some(true),
        "0" | "0.0" | "false" | "f" | "l" | "loss" => Some(false),
        _ => None,
    }
}

/// Parse `YYYY-MM-DD`, ignoring any trailing time component
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub fn deserialize_win<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_win_flag(&raw).ok_or_else(|| de::Error::custom(format!("invalid win flag: {raw:?}")))
}

pub fn deserialize_game_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_game_date(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid game date: {value:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_win_flag_variants() {
        assert_eq!(parse_win_flag("1"), Some(true));
        assert_eq!(parse_win_flag("0.0"), Some(false));
        assert_eq!(parse_win_flag("True"), Some(true));
        assert_eq!(parse_win_flag("L"), Some(false));
        assert_eq!(parse_win_flag("maybe"), None);
    }

    #[test]
    fn test_parse_game_date_drops_time() {
        let expected = NaiveDate::from_ymd_opt(2015, 10, 27);
        assert_eq!(parse_game_date("2015-10-27"), expected);
        assert_eq!(parse_game_date("2015-10-27 00:00:00"), expected);
        assert_eq!(parse_game_date("10/27/2015"), None);
    }
}
