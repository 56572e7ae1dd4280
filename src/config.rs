use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::core::DEFAULT_FORECAST_WINDOW;
use crate::error::Result;
use crate::models::{RankingOptions, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub matching: MatchingSettings,
    #[serde(default)]
    #[validate(nested)]
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MatchingSettings {
    #[serde(default = "default_max_distance_km")]
    #[validate(range(exclusive_min = 0.0))]
    pub max_distance_km: f64,
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_distance_km: default_max_distance_km(),
            weights: WeightsConfig::default(),
        }
    }
}

fn default_max_distance_km() -> f64 { 50.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_type_weight", rename = "type")]
    pub blood_type: f64,
    #[serde(default = "default_eligibility_weight")]
    pub eligibility: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            distance: default_distance_weight(),
            blood_type: default_type_weight(),
            eligibility: default_eligibility_weight(),
        }
    }
}

fn default_distance_weight() -> f64 { 0.4 }
fn default_type_weight() -> f64 { 0.4 }
fn default_eligibility_weight() -> f64 { 0.2 }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForecastSettings {
    #[serde(default = "default_forecast_window")]
    #[validate(range(min = 1, max = 365))]
    pub window: usize,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self { window: default_forecast_window() }
    }
}

fn default_forecast_window() -> usize { DEFAULT_FORECAST_WINDOW }

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
    /// 4. Environment variables (prefixed with BLOOD_MATCH)
    ///
    /// The merged result must pass the same range checks as per-request
    /// overrides.
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BLOOD_MATCH__MATCHING__MAX_DISTANCE_KM -> matching.max_distance_km
            .add_source(env_source());
        Self::finish(builder.build()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;
        Self::finish(config)
    }

    fn finish(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Ranking options derived from the matching section
    pub fn ranking_options(&self) -> RankingOptions {
        RankingOptions {
            max_distance_km: self.matching.max_distance_km,
            weights: ScoringWeights {
                distance: self.matching.weights.distance,
                blood_type: self.matching.weights.blood_type,
                eligibility: self.matching.weights.eligibility,
            },
            as_of: None,
        }
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("BLOOD_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
