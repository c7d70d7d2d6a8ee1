use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub artwork: ArtworkConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Enable logging to file
    #[serde(default = "LoggingConfig::default_enabled")]
    pub enabled: bool,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
    /// Enable logging to console
    #[serde(default = "LoggingConfig::default_log_to_console")]
    pub log_to_console: bool,
    /// Append to existing log file
    #[serde(default = "LoggingConfig::default_append_to_file")]
    pub append_to_file: bool,
    /// Enable log rotation
    #[serde(default = "LoggingConfig::default_rotate_logs")]
    pub rotate_logs: bool,
    /// Maximum log file size in MB before rotation
    #[serde(default = "LoggingConfig::default_rotation_size_mb")]
    pub rotation_size_mb: u64,
    /// Number of log files to keep when rotating
    #[serde(default = "LoggingConfig::default_keep_log_files")]
    pub keep_log_files: u32,
}

impl LoggingConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_level() -> String {
        "info".to_string()
    }

    fn default_log_to_console() -> bool {
        false
    }

    fn default_append_to_file() -> bool {
        true
    }

    fn default_rotate_logs() -> bool {
        true
    }

    fn default_rotation_size_mb() -> u64 {
        10
    }

    fn default_keep_log_files() -> u32 {
        5
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            level: Self::default_level(),
            log_to_console: Self::default_log_to_console(),
            append_to_file: Self::default_append_to_file(),
            rotate_logs: Self::default_rotate_logs(),
            keep_log_files: Self::default_keep_log_files(),
            rotation_size_mb: Self::default_rotation_size_mb(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ArtworkConfig {
    /// Side length for list thumbnails
    #[serde(default = "ArtworkConfig::default_thumb_size")]
    pub thumb_size: u32,
    /// Side length for the expanded-player cover
    #[serde(default = "ArtworkConfig::default_cover_size")]
    pub cover_size: u32,
}

impl ArtworkConfig {
    fn default_thumb_size() -> u32 {
        48
    }

    fn default_cover_size() -> u32 {
        640
    }
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            thumb_size: Self::default_thumb_size(),
            cover_size: Self::default_cover_size(),
        }
    }
}

impl Config {
    /// Default config location under the platform config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("lyrebird").join("config.toml"))
            .unwrap_or_default()
    }

    pub fn load(config_path: Option<PathBuf>) -> color_eyre::Result<Self> {
        let config_path = config_path.unwrap_or_else(Self::default_path);

        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let default_config = Config::default();
            let toml_string = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, &toml_string)?;

            eprintln!("Created default config file at: {}", config_path.display());

            return Ok(default_config);
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Write a default config file, for `--generate-config`.
    pub fn generate_default(path: PathBuf) -> color_eyre::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_string = toml::to_string_pretty(&Config::default())?;
        std::fs::write(&path, &toml_string)?;
        println!("Wrote default config to: {}", path.display());
        Ok(())
    }
}
