use crate::core::DEFAULT_TOP_N;
use crate::report::OutputFormat;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationErrors};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Locations of the two input datasets
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DataSettings {
    #[serde(default = "default_audience_path")]
    #[validate(length(min = 1))]
    pub audience_path: String,
    #[serde(default = "default_catalog_path")]
    #[validate(length(min = 1))]
    pub catalog_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            audience_path: default_audience_path(),
            catalog_path: default_catalog_path(),
        }
    }
}

fn default_audience_path() -> String { "data/audience_data.csv".to_string() }
fn default_catalog_path() -> String { "data/cosmetic_data.csv".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub save_to_file: bool,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            save_to_file: false,
            output_path: default_output_path(),
            format: OutputFormat::default(),
        }
    }
}

fn default_top_n() -> usize { DEFAULT_TOP_N }
fn default_output_path() -> String { "recommendations.txt".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SYNCHRO__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SYNCHRO__REPORT__TOP_N -> report.top_n
            .add_source(environment())
            .build()?;

        apply_log_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_log_overrides(settings)?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.data.validate()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SYNCHRO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// LOG_LEVEL and LOG_FORMAT take precedence over the logging section
fn apply_log_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(level) = std::env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = std::env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
