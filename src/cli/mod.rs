//! Statistella CLI
//!
//! Commands:
//! - `statistella serve` - Serve the dashboard API
//! - `statistella report` - Print the dashboard for a filter selection
//! - `statistella options` - List the values each filter accepts

pub mod output;
pub mod report;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{FilterSelection, Season};

/// NBA evolution dashboard
#[derive(Parser, Debug)]
#[command(name = "statistella")]
#[command(author, version, about = "Filter-and-aggregate analytics over NBA game statistics")]
pub struct Cli {
    /// Directory holding default.toml and environment overrides
    #[arg(short, long, global = true, default_value = "config", env = "STATISTELLA_CONFIG_DIR")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the dashboard JSON API
    Serve {
        /// Override server.port
        #[arg(short, long)]
        port: Option<u16>,
        /// Override server.host
        #[arg(long)]
        host: Option<String>,
    },

    /// Compute the dashboard once and print it
    Report(ReportArgs),

    /// List available seasons, teams and players
    Options {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Season to include (repeatable)
    #[arg(long = "season")]
    pub seasons: Vec<Season>,
    /// Team nickname to include (repeatable)
    #[arg(long = "team")]
    pub teams: Vec<String>,
    /// Player name to include (repeatable)
    #[arg(long = "player")]
    pub players: Vec<String>,
    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

impl ReportArgs {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::new()
            .with_seasons(self.seasons.iter().copied())
            .with_teams(self.teams.iter().cloned())
            .with_players(self.players.iter().cloned())
    }
}
