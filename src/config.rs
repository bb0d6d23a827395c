use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use crate::models::RecommendationWeights;
use crate::services::DirectoryCollections;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    /// Profile document store; ranking requests must carry candidates without it
    #[serde(default)]
    pub directory: Option<DirectorySettings>,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    #[serde(default = "default_mentors_collection")]
    pub mentors_collection: String,
    #[serde(default = "default_students_collection")]
    pub students_collection: String,
    pub timeout_secs: Option<u64>,
}

impl DirectorySettings {
    pub fn collections(&self) -> DirectoryCollections {
        DirectoryCollections {
            mentors: self.mentors_collection.clone(),
            students: self.students_collection.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

fn default_mentors_collection() -> String { "mentors".to_string() }
fn default_students_collection() -> String { "students".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_ttl() -> u64 { 300 }
fn default_cache_capacity() -> u64 { 16 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            weights: WeightsConfig::default(),
        }
    }
}

fn default_limit() -> usize { crate::core::DEFAULT_LIMIT }
fn default_max_limit() -> usize { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_shared_unit_weight")]
    pub shared_unit: u32,
    #[serde(default = "default_expertise_bonus")]
    pub expertise_bonus: u32,
    #[serde(default = "default_goals_bonus")]
    pub goals_bonus: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            shared_unit: default_shared_unit_weight(),
            expertise_bonus: default_expertise_bonus(),
            goals_bonus: default_goals_bonus(),
        }
    }
}

impl From<&WeightsConfig> for RecommendationWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            shared_unit: config.shared_unit,
            expertise_bonus: config.expertise_bonus,
            goals_bonus: config.goals_bonus,
        }
    }
}

fn default_shared_unit_weight() -> u32 { 10 }
fn default_expertise_bonus() -> u32 { 5 }
fn default_goals_bonus() -> u32 { 5 }

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATES__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATES__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Clamp a requested result size to the configured bounds
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        let limit = requested
            .map(usize::from)
            .unwrap_or(self.recommendation.default_limit);
        limit.clamp(1, self.recommendation.max_limit.max(1))
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MATES")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
