use std::{path::Path, time::Duration};

use chrono::TimeDelta;
use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

use crate::{
    domain::pagination::PageSize,
    infrastructure::cli::Cli,
    utils::get_config_dir,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

/// Connection to the hosted letters table
#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "empty_secret", deserialize_with = "deserialize_secret")]
    pub api_key: SecretString,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_recipient_column")]
    pub recipient_column: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: empty_secret(),
            table: default_table(),
            recipient_column: default_recipient_column(),
        }
    }
}

impl BackendConfig {
    /// Required before talking to the REST endpoint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::NotFound(String::from("backend.url")));
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "backend.url must start with http:// or https://, got `{}`",
                self.url
            )));
        }
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::NotFound(String::from("backend.api_key")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default = "default_columns")]
    pub columns: u16,
    #[serde(default = "default_hover_clear_ms")]
    pub hover_clear_ms: u64,
    #[serde(default = "default_recent_hours")]
    pub recent_hours: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            columns: default_columns(),
            hover_clear_ms: default_hover_clear_ms(),
            recent_hours: default_recent_hours(),
        }
    }
}

impl GalleryConfig {
    pub fn hover_clear_delay(&self) -> Duration {
        Duration::from_millis(self.hover_clear_ms)
    }

    pub fn recent_window(&self) -> TimeDelta {
        i64::try_from(self.recent_hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .unwrap_or(TimeDelta::MAX)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewer: String,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_dir())
    }

    /// Built-in defaults, then the first config file found in `config_dir`,
    /// then `LETTERBOX_*` environment variables (`LETTERBOX_BACKEND__API_KEY`)
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LETTERBOX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Command line flags win over every other layer
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(viewer) = &cli.viewer {
            self.viewer.clone_from(viewer);
        }
        if let Some(page_size) = cli.page_size {
            self.gallery.page_size = page_size;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewer.trim().is_empty() {
            return Err(ConfigError::NotFound(String::from(
                "viewer (set it in the config file or pass --viewer)",
            )));
        }
        if self.gallery.columns == 0 {
            return Err(ConfigError::Message(String::from(
                "gallery.columns must be at least 1",
            )));
        }
        Ok(())
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn default_table() -> String {
    String::from("letter")
}

fn default_recipient_column() -> String {
    String::from("receiver")
}

fn default_columns() -> u16 {
    4
}

fn default_hover_clear_ms() -> u64 {
    300
}

fn default_recent_hours() -> u64 {
    24
}
