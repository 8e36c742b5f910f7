use serde::{Deserialize, Serialize};

use crate::brands::BrandCatalog;
use crate::ConfigError;

/// Relative weights of the four sub-scores.
///
/// Weights need not sum to 1; [`ScoringWeights::normalized`] rescales them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    pub frequency: f64,
    pub sentiment: f64,
    pub recency: f64,
    pub brand_fit: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            frequency: 0.30,
            sentiment: 0.30,
            recency: 0.20,
            brand_fit: 0.20,
        }
    }
}

impl ScoringWeights {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.frequency + self.sentiment + self.recency + self.brand_fit
    }

    /// Weights rescaled to sum to 1.
    ///
    /// Only meaningful on validated weights; a zero total yields all zeros.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return Self {
                frequency: 0.0,
                sentiment: 0.0,
                recency: 0.0,
                brand_fit: 0.0,
            };
        }
        Self {
            frequency: self.frequency / total,
            sentiment: self.sentiment / total,
            recency: self.recency / total,
            brand_fit: self.brand_fit / total,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("weights.frequency", self.frequency),
            ("weights.sentiment", self.sentiment),
            ("weights.recency", self.recency),
            ("weights.brand_fit", self.brand_fit),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be non-negative, got {value}"),
                ));
            }
        }
        if !self.total().is_finite() {
            return Err(ConfigError::invalid("weights", "sum of weights must be finite"));
        }
        if self.total() <= 0.0 {
            return Err(ConfigError::invalid("weights", "at least one weight must be positive"));
        }
        Ok(())
    }
}

/// Upper bound on `recency_window_days` (roughly a century).
pub const MAX_RECENCY_WINDOW_DAYS: u32 = 36_500;

/// Knobs for one scoring run. Every field has a default, so a YAML file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// Minimum composite score (0-1) for the rank-1 candidate to become the
    /// Golden Candidate.
    pub golden_threshold: f64,
    /// Candidates scoring strictly below this are rejected.
    pub rejected_threshold: f64,
    /// Number of displayed slots, Golden Candidate included.
    pub top_n: usize,
    /// Candidates with fewer mentions than this are rejected regardless of
    /// score.
    pub min_mentions: usize,
    /// Length of each of the two recency windows.
    pub recency_window_days: u32,
    /// Dated mentions needed across both windows before a trend is computed.
    pub min_recency_points: usize,
    /// Numeric sentiment scores within this distance of zero count as neutral.
    pub sentiment_neutral_band: f64,
    /// Brand-fit credit for a tag naming a target brand.
    pub direct_brand_weight: f64,
    /// Brand-fit credit for an adjacent/generic tag.
    pub adjacent_brand_weight: f64,
    pub brands: BrandCatalog,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            golden_threshold: 0.60,
            rejected_threshold: 0.30,
            top_n: 5,
            min_mentions: 1,
            recency_window_days: 30,
            min_recency_points: 2,
            sentiment_neutral_band: 0.1,
            direct_brand_weight: 1.0,
            adjacent_brand_weight: 0.5,
            brands: BrandCatalog::default(),
        }
    }
}

impl ScoringConfig {
    /// Check every field, reporting the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;

        unit_interval("golden_threshold", self.golden_threshold)?;
        unit_interval("rejected_threshold", self.rejected_threshold)?;
        if self.rejected_threshold >= self.golden_threshold {
            return Err(ConfigError::invalid(
                "rejected_threshold",
                format!(
                    "must be below golden_threshold ({} >= {})",
                    self.rejected_threshold, self.golden_threshold
                ),
            ));
        }

        if self.top_n == 0 {
            return Err(ConfigError::invalid("top_n", "must be at least 1"));
        }
        if self.min_mentions == 0 {
            return Err(ConfigError::invalid("min_mentions", "must be at least 1"));
        }
        if self.recency_window_days == 0 {
            return Err(ConfigError::invalid(
                "recency_window_days",
                "must be at least 1",
            ));
        }
        if self.recency_window_days > MAX_RECENCY_WINDOW_DAYS {
            return Err(ConfigError::invalid(
                "recency_window_days",
                format!(
                    "must be at most {MAX_RECENCY_WINDOW_DAYS}, got {}",
                    self.recency_window_days
                ),
            ));
        }
        if self.min_recency_points == 0 {
            return Err(ConfigError::invalid(
                "min_recency_points",
                "must be at least 1",
            ));
        }

        unit_interval("sentiment_neutral_band", self.sentiment_neutral_band)?;
        if self.sentiment_neutral_band >= 1.0 {
            return Err(ConfigError::invalid(
                "sentiment_neutral_band",
                "must be below 1.0",
            ));
        }

        unit_interval("direct_brand_weight", self.direct_brand_weight)?;
        unit_interval("adjacent_brand_weight", self.adjacent_brand_weight)?;
        if self.adjacent_brand_weight > self.direct_brand_weight {
            return Err(ConfigError::invalid(
                "adjacent_brand_weight",
                "must not exceed direct_brand_weight",
            ));
        }

        self.brands.validate()
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}

#[cfg(test)]
#[path = "scoring_config_test.rs"]
mod tests;
