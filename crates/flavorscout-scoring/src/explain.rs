//! Short human-readable summaries of why a candidate ranked where it did.

use flavorscout_core::ScoringWeights;

use crate::types::{RecencyTrend, SubScores};

const HIGH: f64 = 0.67;
const LOW: f64 = 0.34;

/// Build an explanation such as
/// `"high frequency, positive sentiment, steady trend, weak brand fit"`.
///
/// Phrases are ordered by weighted contribution, largest first; sub-scores
/// with zero weight are left out. A note is appended when some mentions had
/// defaulted fields.
pub(crate) fn explain(
    scores: &SubScores,
    trend: RecencyTrend,
    weights: &ScoringWeights,
    mention_count: usize,
    degraded: usize,
) -> String {
    let w = weights.normalized();
    let mut parts: Vec<(f64, &'static str)> = Vec::with_capacity(4);

    if w.frequency > 0.0 {
        parts.push((w.frequency * scores.frequency, frequency_phrase(scores.frequency)));
    }
    if w.sentiment > 0.0 {
        parts.push((w.sentiment * scores.sentiment, sentiment_phrase(scores.sentiment)));
    }
    if w.recency > 0.0 {
        parts.push((w.recency * scores.recency, trend_phrase(trend)));
    }
    if w.brand_fit > 0.0 {
        parts.push((w.brand_fit * scores.brand_fit, brand_phrase(scores.brand_fit)));
    }

    // Stable sort: equal contributions keep the fixed order above.
    parts.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut text = parts
        .iter()
        .map(|(_, phrase)| *phrase)
        .collect::<Vec<_>>()
        .join(", ");

    if degraded > 0 {
        text.push_str(&format!(
            " ({degraded} of {mention_count} mentions had defaulted fields)"
        ));
    }

    text
}

fn frequency_phrase(score: f64) -> &'static str {
    if score >= HIGH {
        "high frequency"
    } else if score >= LOW {
        "moderate frequency"
    } else {
        "low frequency"
    }
}

fn sentiment_phrase(score: f64) -> &'static str {
    if score >= 0.6 {
        "positive sentiment"
    } else if score > 0.4 {
        "mixed sentiment"
    } else {
        "negative sentiment"
    }
}

fn trend_phrase(trend: RecencyTrend) -> &'static str {
    match trend {
        RecencyTrend::Rising => "rising trend",
        RecencyTrend::Steady => "steady trend",
        RecencyTrend::Falling => "falling trend",
        RecencyTrend::Insufficient => "new or sparse trend",
    }
}

fn brand_phrase(score: f64) -> &'static str {
    if score >= HIGH {
        "strong brand fit"
    } else if score >= LOW {
        "partial brand fit"
    } else {
        "weak brand fit"
    }
}
