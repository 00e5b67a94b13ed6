//! CSV decoding for the processed team and player game tables.

use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::domain::{PlayerGameRecord, TeamGameRecord};
use crate::error::{Result, StatistellaError};

/// Decode every row of a headered CSV stream into `T`
///
/// Columns are matched by header name, so extra columns in the export are
/// ignored and column order does not matter.
pub fn read_records<T, R>(reader: R) -> std::result::Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader.deserialize().collect()
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    debug!("Opening {}", path.display());
    let file = std::fs::File::open(path).map_err(|e| {
        StatistellaError::dataset_load(path, csv::Error::from(e))
    })?;
    read_records(file).map_err(|e| StatistellaError::dataset_load(path, e))
}

/// Load `team_game_stats.csv`
pub fn load_team_stats(path: &Path) -> Result<Vec<TeamGameRecord>> {
    let rows: Vec<TeamGameRecord> = load_records(path)?;
    info!("Loaded {} team-game rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load `player_game_stats.csv`
pub fn load_player_stats(path: &Path) -> Result<Vec<PlayerGameRecord>> {
    let rows: Vec<PlayerGameRecord> = load_records(path)?;
    info!(
        "Loaded {} player-game rows from {}",
        rows.len(),
        path.display()
    );
    Ok(rows)
}
