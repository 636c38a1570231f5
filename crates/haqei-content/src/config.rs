//! Configuration for the HaQei engine

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ContentError};
use crate::store::ContentStore;

/// Main engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Interaction resolver settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Archetype scorer settings
    #[serde(default)]
    pub scorer: ScorerConfig,

    /// Content store source
    #[serde(default)]
    pub content: ContentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interaction resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Confidence below which a resolution is reported as ambiguous
    #[serde(default = "default_ambiguity_threshold")]
    pub ambiguity_threshold: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ambiguity_threshold: default_ambiguity_threshold(),
        }
    }
}

/// Archetype scorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Accumulated totals at or below this are treated as zero affinity
    #[serde(default = "default_zero_epsilon")]
    pub zero_epsilon: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            zero_epsilon: default_zero_epsilon(),
        }
    }
}

/// Content store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Replacement content JSON; the embedded corpus is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ContentConfig {
    pub fn load_store(&self) -> Result<Arc<ContentStore>, ContentError> {
        match &self.path {
            Some(path) => ContentStore::from_path(path).map(Arc::new),
            None => ContentStore::embedded(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_ambiguity_threshold() -> f64 {
    0.15
}

fn default_zero_epsilon() -> f64 {
    1e-12
}

fn default_log_level() -> String {
    "info".to_string()
}

impl EngineConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `HAQEI__SECTION__KEY` environment variables.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();

        builder = builder.add_source(::config::Config::try_from(&EngineConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(::config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("HAQEI")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: EngineConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.resolver.ambiguity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid {
                field: "resolver.ambiguity_threshold",
                reason: format!("{} is outside [0, 1]", threshold),
            });
        }
        let epsilon = self.scorer.zero_epsilon;
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "scorer.zero_epsilon",
                reason: format!("{} must be a positive finite number", epsilon),
            });
        }
        Ok(())
    }
}
