use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::error::Result;
use crate::pipeline::derive::DerivePolicy;

const DEFAULT_CONFIG_PATH: &str = "marquee.toml";
const DEFAULT_WHATS_ON_URL: &str = "https://www.myvue.com/cinema/nottingham/whats-on";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub derive: DerivePolicy,
    pub sources: SourcesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("public/schedule.json"),
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub whats_on_url: String,
    pub showtimes_api_url: Option<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            whats_on_url: DEFAULT_WHATS_ON_URL.to_string(),
            showtimes_api_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log directory; file logging is off when unset.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Loads the TOML config, falling back to built-in defaults when the
    /// file does not exist. Environment variables override source URLs.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("MARQUEE_WHATS_ON_URL") {
            config.sources.whats_on_url = url;
        }
        if let Ok(url) = std::env::var("MARQUEE_SHOWTIMES_API_URL") {
            config.sources.showtimes_api_url = Some(url);
        }
        Ok(config)
    }
}
