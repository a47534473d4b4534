use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ingestion: IngestionConfig,
    #[serde(default)]
    pub sources: Vec<PlaylistSourceConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// One configured playlist source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSourceConfig {
    pub name: String,
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ingestion: IngestionConfig {
                timeout_seconds: 30,
                user_agent: format!("m3u-ingest/{}", env!("CARGO_PKG_VERSION")),
            },
            sources: Vec::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(&config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_file, contents)?;
            Ok(default_config)
        }
    }
}
