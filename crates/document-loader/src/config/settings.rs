use super::processing::{ProcessorConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::utils::error::LoaderError;
use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/settings";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Raw chunking values; validated when turned into a [`ProcessorConfig`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChunkingConfig {
    #[serde(default = "default_chunk_size")]
    pub size: i64,
    #[serde(default = "default_chunk_overlap")]
    pub overlap: i64,
}

fn default_chunk_size() -> i64 {
    DEFAULT_CHUNK_SIZE as i64
}

fn default_chunk_overlap() -> i64 {
    DEFAULT_CHUNK_OVERLAP as i64
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            size: default_chunk_size(),
            overlap: default_chunk_overlap(),
        }
    }
}

impl TryFrom<&ChunkingConfig> for ProcessorConfig {
    type Error = LoaderError;

    fn try_from(chunking: &ChunkingConfig) -> Result<Self, Self::Error> {
        ProcessorConfig::new(chunking.size, chunking.overlap)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Directory for the daily-rolling log file; stderr only when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info,document_loader=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            directory: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Settings {
    /// Load from `config/settings.*` (optional), `.env`, then `APP_*` variables.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH), false)
    }

    /// Same as [`Settings::load`] with an explicit file. An explicitly given
    /// file must exist.
    pub fn load_from(path: &Path, required: bool) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::build(path, required, env_source())
    }

    fn build(path: &Path, required: bool, env: Environment) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(env)
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    pub fn processor_config(&self) -> std::result::Result<ProcessorConfig, LoaderError> {
        ProcessorConfig::try_from(&self.chunking)
    }
}

// Example: APP_CHUNKING__SIZE=150
fn env_source() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
