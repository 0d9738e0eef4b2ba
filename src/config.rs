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
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Player season averages (JSON array)
    #[serde(default = "default_players_path")]
    pub players_path: PathBuf,
    /// Team defensive ratings (JSON array)
    #[serde(default = "default_teams_path")]
    pub teams_path: PathBuf,
}

fn default_players_path() -> PathBuf {
    PathBuf::from("data/player_stats.json")
}

fn default_teams_path() -> PathBuf {
    PathBuf::from("data/team_stats.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            players_path: default_players_path(),
            teams_path: default_teams_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
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
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("PROPLINE_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (PROPLINE_SERVER__PORT, etc.)
            .add_source(
                Environment::with_prefix("PROPLINE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Point both dataset paths at a directory using the default file names
    pub fn with_data_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        let dir = dir.as_ref();
        self.data.players_path = dir.join(crate::data::PLAYERS_FILE);
        self.data.teams_path = dir.join(crate::data::TEAMS_FILE);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.data.players_path.as_os_str().is_empty() {
            errors.push("data.players_path must not be empty".to_string());
        }

        if self.data.teams_path.as_os_str().is_empty() {
            errors.push("data.teams_path must not be empty".to_string());
        }

        if self.server.port == 0 {
            errors.push("server.port must be non-zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
