use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the team-level game statistics CSV
    #[serde(default = "default_team_stats_path")]
    pub team_stats_path: PathBuf,
    /// Path to the player-level game statistics CSV
    #[serde(default = "default_player_stats_path")]
    pub player_stats_path: PathBuf,
}

fn default_team_stats_path() -> PathBuf {
    PathBuf::from("Processed_Data/team_game_stats.csv")
}

fn default_player_stats_path() -> PathBuf {
    PathBuf::from("Processed_Data/player_game_stats.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            team_stats_path: default_team_stats_path(),
            player_stats_path: default_player_stats_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind the dashboard API on
    #[serde(default = "default_host")]
    pub host: String,
    /// Dashboard API port (default: 8050)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Thresholds used by the aggregation pipeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsConfig {
    /// Rows kept by every ranked chart
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Minimum games for the "most impactful players" ranking
    #[serde(default = "default_impact_min_games")]
    pub impact_min_games: usize,
    /// Points needed for a game to count as a high-scoring game
    #[serde(default = "default_high_scorer_points")]
    pub high_scorer_points: f64,
    /// Minimum games for a player to be classified into an archetype
    #[serde(default = "default_archetype_min_games")]
    pub archetype_min_games: usize,
    /// Minimum average minutes for a player to be classified into an archetype
    #[serde(default = "default_archetype_min_avg_minutes")]
    pub archetype_min_avg_minutes: f64,
}

fn default_top_n() -> usize {
    10
}

fn default_impact_min_games() -> usize {
    100
}

fn default_high_scorer_points() -> f64 {
    20.0
}

fn default_archetype_min_games() -> usize {
    30
}

fn default_archetype_min_avg_minutes() -> f64 {
    8.0
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            impact_min_games: default_impact_min_games(),
            high_scorer_points: default_high_scorer_points(),
            archetype_min_games: default_archetype_min_games(),
            archetype_min_avg_minutes: default_archetype_min_avg_minutes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rotated log files; console only when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("server.port", 8050)?
            .set_default("analytics.top_n", 10)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("STATISTELLA_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (STATISTELLA_DATA__TEAM_STATS_PATH, etc.)
            .add_source(
                Environment::with_prefix("STATISTELLA")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.data.team_stats_path.as_os_str().is_empty() {
            errors.push("data.team_stats_path must not be empty".to_string());
        }

        if self.data.player_stats_path.as_os_str().is_empty() {
            errors.push("data.player_stats_path must not be empty".to_string());
        }

        if self.analytics.top_n == 0 {
            errors.push("analytics.top_n must be at least 1".to_string());
        }

        if !self.analytics.high_scorer_points.is_finite() || self.analytics.high_scorer_points < 0.0
        {
            errors.push("analytics.high_scorer_points must be a non-negative number".to_string());
        }

        if !self.analytics.archetype_min_avg_minutes.is_finite()
            || self.analytics.archetype_min_avg_minutes <= 0.0
        {
            errors.push(format!(
                "analytics.archetype_min_avg_minutes must be positive, got {}",
                self.analytics.archetype_min_avg_minutes
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
