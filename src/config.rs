use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::RECOMMENDATION_TEST_TOLERANCE;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
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

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Path of the university dataset JSON file
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf { PathBuf::from("data/universities.json") }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    /// Test score tolerance used by the recommendation pipeline
    #[serde(default = "default_test_tolerance")]
    pub test_tolerance: i64,
    /// Number of recommendations returned to API clients
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            test_tolerance: default_test_tolerance(),
            max_results: default_max_results(),
        }
    }
}

fn default_test_tolerance() -> i64 { RECOMMENDATION_TEST_TOLERANCE }
fn default_max_results() -> usize { 20 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_gpa_weight")]
    pub gpa: f64,
    #[serde(default = "default_affordability_weight")]
    pub affordability: f64,
    #[serde(default = "default_test_score_weight")]
    pub test_score: f64,
    #[serde(default = "default_world_rank_weight")]
    pub world_rank: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            gpa: default_gpa_weight(),
            affordability: default_affordability_weight(),
            test_score: default_test_score_weight(),
            world_rank: default_world_rank_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            gpa: config.gpa,
            affordability: config.affordability,
            test_score: config.test_score,
            world_rank: config.world_rank,
        }
    }
}

fn default_gpa_weight() -> f64 { 30.0 }
fn default_affordability_weight() -> f64 { 25.0 }
fn default_test_score_weight() -> f64 { 20.0 }
fn default_world_rank_weight() -> f64 { 25.0 }

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
    /// 4. Environment variables (prefixed with UNIREC)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., UNIREC__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("UNIREC")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
