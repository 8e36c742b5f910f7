use flavorscout_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("scoring config rejected: {0}")]
    Config(#[from] ConfigError),
}
