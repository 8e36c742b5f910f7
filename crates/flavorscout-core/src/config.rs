use std::env::VarError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::scoring_config::ScoringConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load the scoring configuration: defaults, then the YAML file at `path`
/// (if any), then `FLAVORSCOUT_*` environment overrides. The result is
/// validated before it is returned, so scoring never starts on a bad config.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, an override is
/// malformed, or the merged config fails validation.
pub fn load_scoring_config(path: Option<&Path>) -> Result<ScoringConfig, ConfigError> {
    build_scoring_config(path, |key| std::env::var(key))
}

fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("FLAVORSCOUT_ENV", "development"))?;
    let log_level = or_default("FLAVORSCOUT_LOG_LEVEL", "info");
    let data_dir = match lookup("FLAVORSCOUT_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ if env == Environment::Production => {
            return Err(ConfigError::MissingEnvVar(
                "FLAVORSCOUT_DATA_DIR".to_string(),
            ));
        }
        _ => PathBuf::from("data"),
    };
    let scoring_config_path = lookup("FLAVORSCOUT_SCORING_CONFIG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from);
    let annotate_batch_size: usize = parse_var(
        "FLAVORSCOUT_ANNOTATE_BATCH_SIZE",
        &or_default("FLAVORSCOUT_ANNOTATE_BATCH_SIZE", "20"),
    )?;
    if annotate_batch_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FLAVORSCOUT_ANNOTATE_BATCH_SIZE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        scoring_config_path,
        annotate_batch_size,
    })
}

fn build_scoring_config<F>(path: Option<&Path>, lookup: F) -> Result<ScoringConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut config = match path {
        Some(path) => read_scoring_file(path)?,
        None => ScoringConfig::default(),
    };

    apply_override(&lookup, "FLAVORSCOUT_WEIGHT_FREQUENCY", &mut config.weights.frequency)?;
    apply_override(&lookup, "FLAVORSCOUT_WEIGHT_SENTIMENT", &mut config.weights.sentiment)?;
    apply_override(&lookup, "FLAVORSCOUT_WEIGHT_RECENCY", &mut config.weights.recency)?;
    apply_override(&lookup, "FLAVORSCOUT_WEIGHT_BRAND_FIT", &mut config.weights.brand_fit)?;
    apply_override(&lookup, "FLAVORSCOUT_GOLDEN_THRESHOLD", &mut config.golden_threshold)?;
    apply_override(&lookup, "FLAVORSCOUT_REJECTED_THRESHOLD", &mut config.rejected_threshold)?;
    apply_override(&lookup, "FLAVORSCOUT_TOP_N", &mut config.top_n)?;
    apply_override(&lookup, "FLAVORSCOUT_MIN_MENTIONS", &mut config.min_mentions)?;
    apply_override(
        &lookup,
        "FLAVORSCOUT_RECENCY_WINDOW_DAYS",
        &mut config.recency_window_days,
    )?;

    config.validate()?;
    Ok(config)
}

fn read_scoring_file(path: &Path) -> Result<ScoringConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    let config: ScoringConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

fn apply_override<F, T>(lookup: &F, var: &str, slot: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Ok(raw) = lookup(var) {
        *slot = parse_var(var, &raw)?;
    }
    Ok(())
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FLAVORSCOUT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
