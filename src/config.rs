//! Configuration management for the guide renderer
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `HEYUAN_GUIDE_*` environment variables. CLI flags are applied on top by
//! the binary.

use crate::GuideError;
use crate::source::DEFAULT_DATA_LOCATION;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Where the travel data comes from
    #[serde(default)]
    pub source: SourceConfig,
    /// Rendered page output
    #[serde(default)]
    pub output: OutputConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File path or http(s) URL of the travel data document
    #[serde(default = "default_source_location")]
    pub location: String,
    /// Request timeout in seconds for HTTP locations
    #[serde(default = "default_source_timeout")]
    pub timeout_seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where `render` writes the composed page
    #[serde(default = "default_output_path")]
    pub path: String,
    /// Custom page template; the built-in one is used when unset
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory served for images, stylesheets and other assets
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_source_location() -> String {
    DEFAULT_DATA_LOCATION.to_string()
}

fn default_source_timeout() -> u32 {
    10
}

fn default_output_path() -> String {
    "dist/index.html".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_source_location(),
            timeout_seconds: default_source_timeout(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            template: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl GuideConfig {
    /// Load configuration from `config_path`, or from the default file
    /// location when none is given, then from the environment
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(GuideError::config(format!(
                        "Config file not found: {}",
                        path.display()
                    ))
                    .into());
                }
                Some(path)
            }
            None => Self::get_config_path()
                .filter(|path| path.exists())
                .or_else(|| Some(PathBuf::from("config.toml")).filter(|path| path.exists())),
        };

        if let Some(config_file) = &config_file {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // e.g. HEYUAN_GUIDE_SOURCE__LOCATION
        builder = builder.add_source(
            Environment::with_prefix("HEYUAN_GUIDE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: GuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("heyuan-guide").join("config.toml"))
    }

    /// Apply default values to fields left empty
    pub fn apply_defaults(&mut self) {
        if self.source.location.trim().is_empty() {
            self.source.location = default_source_location();
        }
        if self.source.timeout_seconds == 0 {
            self.source.timeout_seconds = default_source_timeout();
        }
        if self.output.path.is_empty() {
            self.output.path = default_output_path();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.source.timeout_seconds > 300 {
            return Err(
                GuideError::config("Data source timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.server.port == 0 {
            return Err(GuideError::config("Server port must be non-zero").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(GuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self
            .output
            .template
            .as_deref()
            .is_some_and(|template| template.trim().is_empty())
        {
            return Err(GuideError::config(
                "Output template cannot be empty if provided. Either remove it or give a path.",
            )
            .into());
        }

        Ok(())
    }

    #[must_use]
    pub fn source_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GuideConfig::default();
        assert_eq!(config.source.location, "data/travel_data.json");
        assert_eq!(config.source.timeout_seconds, 10);
        assert_eq!(config.output.path, "dist/index.html");
        assert!(config.output.template.is_none());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "static");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = GuideConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = GuideConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = GuideConfig::default();
        config.source.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));

        let mut config = GuideConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = GuideConfig::default();
        config.source.location = "  ".to_string();
        config.source.timeout_seconds = 0;
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.source.location, "data/travel_data.json");
        assert_eq!(config.source.timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file_with_partial_sections() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\nlocation = \"https://example.com/travel_data.json\"\n\n[server]\nport = 9090"
        )
        .unwrap();

        let config = GuideConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.source.location, "https://example.com/travel_data.json");
        assert_eq!(config.source.timeout_seconds, 10);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = GuideConfig::load_from_path(Some(PathBuf::from("no/such/config.toml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Config file not found"));
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = GuideConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("heyuan-guide"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
