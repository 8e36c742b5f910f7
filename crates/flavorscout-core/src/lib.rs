//! Shared domain types and configuration for Flavor Scout.
//!
//! Holds the [`Mention`] record produced by annotation, the brand catalog used
//! for brand-fit resolution, and the validated [`ScoringConfig`] consumed by
//! the scoring engine.

pub mod app_config;
pub mod brands;
pub mod config;
pub mod mention;
pub mod scoring_config;
pub mod text;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use brands::{BrandCatalog, BrandConfig, BrandMatch};
pub use config::{load_app_config, load_app_config_from_env, load_scoring_config};
pub use mention::{Mention, SentimentLabel};
pub use scoring_config::{ScoringConfig, ScoringWeights};
pub use text::fold_label;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid scoring config field `{field}`: {reason}")]
    Invalid { field: String, reason: String },

    #[error("failed to read config file {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    FileParse(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
