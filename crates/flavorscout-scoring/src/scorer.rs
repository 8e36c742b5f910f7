//! Sub-score functions. Each maps group statistics onto `[0.0, 1.0]`.

use chrono::{DateTime, Duration, Utc};
use flavorscout_core::ScoringWeights;

use crate::types::{RecencySummary, RecencyTrend, SentimentCounts, SubScores};

/// Recency score given to groups whose trend cannot be measured.
pub const NEUTRAL_RECENCY: f64 = 0.5;

/// Trend scores at or above this read as rising, at or below
/// `1 - RISING_CUTOFF` as falling.
const RISING_CUTOFF: f64 = 0.6;

/// Log-scaled mention frequency relative to the batch maximum.
///
/// `ln(1 + count) / ln(1 + max_count)`: the most-mentioned flavor scores
/// 1.0, and the curve keeps one very popular flavor from flattening the rest.
#[must_use]
pub fn frequency_score(count: usize, max_count: usize) -> f64 {
    if count == 0 || max_count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let (count, max_count) = (count as f64, max_count as f64);
    ((1.0 + count).ln() / (1.0 + max_count).ln()).clamp(0.0, 1.0)
}

/// Net positive share mapped from `[-1, 1]` onto `[0, 1]`.
///
/// An all-neutral or empty group scores 0.5.
#[must_use]
pub fn sentiment_score(counts: &SentimentCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.5;
    }
    #[allow(clippy::cast_precision_loss)]
    let net = (counts.positive as f64 - counts.negative as f64) / total as f64;
    0.5 + 0.5 * net
}

/// Mention counts in the recent and prior windows, plus the resulting score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecencyAssessment {
    pub summary: RecencySummary,
    pub score: f64,
}

/// Compare mention density in the window ending at `anchor` with the window
/// before it.
///
/// Groups with fewer than `min_points` mentions across both windows, or whose
/// dated mentions span less than one window, get [`NEUTRAL_RECENCY`]: a new
/// flavor is not penalized for having a short history.
#[must_use]
pub fn recency_score(
    timestamps: &[DateTime<Utc>],
    anchor: Option<DateTime<Utc>>,
    window_days: u32,
    min_points: usize,
) -> RecencyAssessment {
    let window = Duration::days(i64::from(window_days));
    let Some(anchor) = anchor else {
        return insufficient(0, 0);
    };

    let Some(recent_start) = anchor.checked_sub_signed(window) else {
        return insufficient(0, 0);
    };
    let Some(prior_start) = recent_start.checked_sub_signed(window) else {
        return insufficient(0, 0);
    };

    let recent = timestamps
        .iter()
        .filter(|t| **t > recent_start && **t <= anchor)
        .count();
    let prior = timestamps
        .iter()
        .filter(|t| **t > prior_start && **t <= recent_start)
        .count();

    let span = match (timestamps.iter().min(), timestamps.iter().max()) {
        (Some(first), Some(last)) => *last - *first,
        _ => Duration::zero(),
    };

    if recent + prior < min_points || span < window {
        return insufficient(recent, prior);
    }

    #[allow(clippy::cast_precision_loss)]
    let trend = (recent as f64 - prior as f64) / (recent + prior) as f64;
    let score = 0.5 + 0.5 * trend;

    let label = if score >= RISING_CUTOFF {
        RecencyTrend::Rising
    } else if score <= 1.0 - RISING_CUTOFF {
        RecencyTrend::Falling
    } else {
        RecencyTrend::Steady
    };

    RecencyAssessment {
        summary: RecencySummary {
            recent_mentions: recent,
            prior_mentions: prior,
            trend: label,
        },
        score,
    }
}

fn insufficient(recent: usize, prior: usize) -> RecencyAssessment {
    RecencyAssessment {
        summary: RecencySummary {
            recent_mentions: recent,
            prior_mentions: prior,
            trend: RecencyTrend::Insufficient,
        },
        score: NEUTRAL_RECENCY,
    }
}

/// Mean per-mention brand credit.
///
/// `credit_sum` is the sum of direct and adjacent weights earned by the
/// group's mentions.
#[must_use]
pub fn brand_fit_score(credit_sum: f64, mention_count: usize) -> f64 {
    if mention_count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = credit_sum / mention_count as f64;
    mean.clamp(0.0, 1.0)
}

/// Weighted sum of the sub-scores, rounded to four decimals so scores that
/// differ only by float noise compare equal.
#[must_use]
pub fn composite_score(scores: &SubScores, weights: &ScoringWeights) -> f64 {
    let w = weights.normalized();
    let raw = scores.frequency * w.frequency
        + scores.sentiment * w.sentiment
        + scores.recency * w.recency
        + scores.brand_fit * w.brand_fit;
    (raw.clamp(0.0, 1.0) * 10_000.0).round() / 10_000.0
}
