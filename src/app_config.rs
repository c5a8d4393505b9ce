use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::alignment::MatchStrategy;

/// Application configuration module
/// This module handles the library configuration including loading,
/// validating and saving configuration settings.
/// Represents the library configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Quran source config
    #[serde(default)]
    pub quran: QuranConfig,

    /// Hadith source config
    #[serde(default)]
    pub hadith: HadithConfig,

    /// Playback config
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Quran source configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuranConfig {
    // @field: API base URL
    #[serde(default = "default_quran_endpoint")]
    pub endpoint: String,

    // @field: Original-script edition identifier
    #[serde(default = "default_arabic_edition")]
    pub arabic_edition: String,

    // @field: Translation edition identifier
    #[serde(default = "default_translation_edition")]
    pub translation_edition: String,

    // @field: How verses of the two editions are correlated
    #[serde(default)]
    pub strategy: MatchStrategy,

    // @field: Request timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Hadith source configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HadithConfig {
    // @field: CDN base URL
    #[serde(default = "default_hadith_endpoint")]
    pub endpoint: String,

    // @field: Collection opened by default
    #[serde(default = "default_collection")]
    pub default_collection: String,

    // @field: Request timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Playback configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaybackConfig {
    // @field: Reciter variant used when none was selected for a track
    #[serde(default = "default_reciter")]
    pub default_reciter: String,

    // @field: Stream open timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub open_timeout_secs: u64,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_quran_endpoint() -> String {
    "https://api.alquran.cloud/v1".to_string()
}

fn default_arabic_edition() -> String {
    "quran-uthmani".to_string()
}

fn default_translation_edition() -> String {
    "en.asad".to_string()
}

fn default_hadith_endpoint() -> String {
    "https://cdn.jsdelivr.net/gh/aashif000/DB-for-Q-H@main".to_string()
}

fn default_collection() -> String {
    "bukhari".to_string()
}

fn default_reciter() -> String {
    "ar.alafasy".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for QuranConfig {
    fn default() -> Self {
        Self {
            endpoint: default_quran_endpoint(),
            arabic_edition: default_arabic_edition(),
            translation_edition: default_translation_edition(),
            strategy: MatchStrategy::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for HadithConfig {
    fn default() -> Self {
        Self {
            endpoint: default_hadith_endpoint(),
            default_collection: default_collection(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_reciter: default_reciter(),
            open_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            quran: QuranConfig::default(),
            hadith: HadithConfig::default(),
            playback: PlaybackConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.quran.arabic_edition.is_empty() {
            return Err(anyhow!("An original-script Quran edition is required"));
        }
        if self.quran.translation_edition.is_empty() {
            return Err(anyhow!("A translation edition is required"));
        }
        if self.hadith.default_collection.is_empty() {
            return Err(anyhow!("A default hadith collection is required"));
        }
        if self.quran.timeout_secs == 0 || self.hadith.timeout_secs == 0 {
            return Err(anyhow!("Request timeouts must be non-zero"));
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Default config file location under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rehal").join("config.json"))
    }
}
