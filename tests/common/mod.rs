#![allow(dead_code)]

use statistella::config::AnalyticsConfig;
use statistella::dataset::{read_records, Dataset};
use statistella::domain::{PlayerGameRecord, TeamGameRecord};

/// Five games across two seasons; the Lakers go W, W, L, W
pub const TEAM_CSV: &str = "\
SEASON,NICKNAME,CONFERENCE,GAME_ID,PTS,WIN,HOME_AWAY,POINT_DIFF,GAME_DATE_EST
2019,Lakers,West,g1,112,1,Home,8,2019-10-22
2019,Clippers,West,g1,104,0,Away,-8,2019-10-22
2019,Lakers,West,g2,120,1,Away,10,2019-11-05
2019,Celtics,East,g2,110,0,Home,-10,2019-11-05
2019,Lakers,West,g3,99,0,Home,-3,2019-12-25
2019,Celtics,East,g3,102,1,Away,3,2019-12-25
2019,Clippers,West,g4,108,1,Home,6,2020-01-10
2019,Celtics,East,g4,102,0,Away,-6,2020-01-10
2020,Lakers,West,g5,115,1,Home,5,2020-12-22
2020,Clippers,West,g5,110,0,Away,-5,2020-12-22
";

pub const PLAYER_CSV: &str = "\
SEASON,PLAYER_NAME,NICKNAME,MINUTES_PLAYED,PTS,EFFICIENCY_SCORE,GAME_ID,GAME_DATE_EST
2019,LeBron James,Lakers,35,28,30,g1,2019-10-22
2019,Kawhi Leonard,Clippers,33,27,26,g1,2019-10-22
2019,LeBron James,Lakers,36,30,33,g2,2019-11-05
2019,Jayson Tatum,Celtics,37,26,24,g2,2019-11-05
2019,Kawhi Leonard,Clippers,32,24,25,g4,2020-01-10
2020,LeBron James,Lakers,34,25,28,g5,2020-12-22
2020,Alex Caruso,Lakers,20,8,9,g5,2020-12-22
";

pub fn team_rows() -> Vec<TeamGameRecord> {
    read_records(TEAM_CSV.as_bytes()).expect("team fixture decodes")
}

pub fn player_rows() -> Vec<PlayerGameRecord> {
    read_records(PLAYER_CSV.as_bytes()).expect("player fixture decodes")
}

pub fn dataset() -> Dataset {
    Dataset::new(team_rows(), player_rows())
}

/// Default thresholds, relaxed so the small fixture reaches every chart
pub fn small_sample_config() -> AnalyticsConfig {
    AnalyticsConfig {
        impact_min_games: 2,
        archetype_min_games: 1,
        ..AnalyticsConfig::default()
    }
}
