use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::Parser;
use std::fs;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration for the taskcards server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// URL for the database connection
    pub database_url: String,
    /// Address the HTTP server listens on
    pub bind_address: String,
    /// Origin patterns allowed by CORS, e.g. `https://*`; a lone `*` allows any origin
    pub allowed_origins: Vec<String>,
    /// Directory for rolling JSON log files, if file logging is wanted
    pub log_dir: Option<PathBuf>,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub bind_address: Option<String>,
    #[serde(default)]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

/// Command line arguments for the server
#[derive(Parser, Debug, Default)]
#[clap(name = "taskcards", about = "A small REST service for task cards")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to listen on, e.g. 127.0.0.1:3000
    #[clap(long, env = "TASKCARDS_BIND")]
    pub bind_address: Option<String>,

    /// Comma-separated list of allowed CORS origins
    #[clap(long, env = "TASKCARDS_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Option<Vec<String>>,

    /// Directory for JSON log files
    #[clap(long, env = "TASKCARDS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Debug mode
    #[clap(long, env = "TASKCARDS_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            bind_address: update.bind_address.unwrap_or(self.bind_address),
            allowed_origins: update.allowed_origins.unwrap_or(self.allowed_origins),
            log_dir: update.log_dir.or(self.log_dir),
        }
    }

    /// Whether CORS should accept requests from any origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Returns the base (default) configuration
///
/// The database file lives in the config directory when there is one.
pub fn base_config(config_dir: Option<&Path>) -> Config {
    let database_url = config_dir.map_or("taskcards.db".to_string(), |dir| {
        dir.join("taskcards.db").to_string_lossy().to_string()
    });

    Config {
        database_url,
        bind_address: "127.0.0.1:3000".to_string(),
        allowed_origins: vec!["https://*".to_string(), "http://*".to_string()],
        log_dir: None,
    }
}

/// Returns the platform config directory, e.g. `~/.config/taskcards`
pub fn get_config_dir_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "taskcards", "taskcards")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Loads configuration from a TOML file
///
/// A missing file is not an error; it yields an empty update.
pub fn config_from_file(config_path: Option<&Path>) -> Result<ConfigUpdate> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config file {:?}", config_path))?;
    let update = toml::from_str::<ConfigUpdate>(&content)
        .with_context(|| format!("failed to parse config file {:?}", config_path))?;

    info!("Loaded configuration from {:?}", config_path);
    Ok(update)
}

/// Loads configuration from command line arguments and environment variables
pub fn config_from_args(args: &CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url.clone(),
        bind_address: args.bind_address.clone(),
        allowed_origins: args.allowed_origins.clone(),
        log_dir: args.log_dir.clone(),
    }
}

/// Gets the complete configuration by combining defaults with
/// values from the config file, environment variables and command line
/// arguments, in order of increasing precedence
pub fn get_config(args: &CliArgs) -> Config {
    let config_dir = get_config_dir_path().filter(|path| {
        if path.exists() {
            true
        } else {
            info!("Config directory not found at {:?}, using defaults", path);
            false
        }
    });

    let file_update = match config_from_file(config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME)).as_deref()) {
        Ok(update) => update,
        Err(e) => {
            warn!("Ignoring config file: {:#}", e);
            ConfigUpdate::default()
        }
    };

    let config = base_config(config_dir.as_deref())
        .apply_update(file_update)
        .apply_update(config_from_args(args));

    info!(
        "Final configuration: database_url={}, bind_address={}, allowed_origins={:?}, log_dir={:?}",
        config.database_url, config.bind_address, config.allowed_origins, config.log_dir
    );

    config
}
