//! Scoring run orchestration.

use flavorscout_core::{Mention, ScoringConfig};

use crate::aggregate::group_mentions;
use crate::error::ScoringError;
use crate::explain::explain;
use crate::rank::rank_and_partition;
use crate::scorer::{
    brand_fit_score, composite_score, frequency_score, recency_score, sentiment_score,
};
use crate::types::{FlavorCandidate, MentionCounts, RankedResult, SubScores, Tier};

/// Score a batch of mentions and rank the resulting flavor candidates.
///
/// 1. Fold flavor names and group mentions; unusable names are skipped.
/// 2. Compute frequency, sentiment, recency and brand-fit sub-scores per group.
/// 3. Combine them into a composite score using the normalized weights.
/// 4. Order deterministically and assign Golden / Top / Rejected / Dropped.
/// 5. Attach an explanation to every candidate.
///
/// `config` is expected to have passed [`ScoringConfig::validate`]; use
/// [`score_mentions_checked`] when that is not guaranteed. An empty input
/// produces an empty result with zero counts.
#[must_use]
pub fn score_mentions(mentions: &[Mention], config: &ScoringConfig) -> RankedResult {
    let grouped = group_mentions(mentions, config);
    let max_count = grouped.max_count();

    let mut candidates: Vec<FlavorCandidate> = grouped
        .groups
        .iter()
        .map(|(flavor, stats)| {
            let recency = recency_score(
                &stats.timestamps,
                grouped.anchor,
                config.recency_window_days,
                config.min_recency_points,
            );
            let sub_scores = SubScores {
                frequency: frequency_score(stats.mention_count, max_count),
                sentiment: sentiment_score(&stats.sentiment),
                recency: recency.score,
                brand_fit: brand_fit_score(stats.brand_credit, stats.mention_count),
            };
            let composite = composite_score(&sub_scores, &config.weights);
            let explanation = explain(
                &sub_scores,
                recency.summary.trend,
                &config.weights,
                stats.mention_count,
                stats.degraded,
            );

            FlavorCandidate {
                flavor: flavor.clone(),
                rank: 0,
                tier: Tier::Dropped,
                composite_score: composite,
                sub_scores,
                mention_count: stats.mention_count,
                sentiment: stats.sentiment,
                recency: recency.summary,
                recommended_brand: stats.recommended_brand(),
                brand_breakdown: stats.brand_breakdown.clone(),
                degraded_mentions: stats.degraded,
                sample_snippets: stats.samples.clone(),
                explanation,
            }
        })
        .collect();

    rank_and_partition(&mut candidates, config);

    let counts = MentionCounts {
        total: mentions.len(),
        scored: grouped.scored(),
        skipped: grouped.skipped,
        degraded: grouped.degraded(),
    };

    if counts.skipped > 0 || counts.degraded > 0 {
        tracing::debug!(
            total = counts.total,
            skipped = counts.skipped,
            degraded = counts.degraded,
            "scored mentions with incomplete input"
        );
    }
    tracing::debug!(
        candidates = candidates.len(),
        golden = candidates.iter().any(|c| c.tier == Tier::Golden),
        "scoring run complete"
    );

    RankedResult { candidates, counts }
}

/// Validate `config`, then score.
///
/// # Errors
///
/// Returns [`ScoringError::Config`] before any scoring work if the
/// configuration is invalid.
pub fn score_mentions_checked(
    mentions: &[Mention],
    config: &ScoringConfig,
) -> Result<RankedResult, ScoringError> {
    config.validate()?;
    Ok(score_mentions(mentions, config))
}
